// src/noyau/objet.rs
//
// Éléments d'expression tels que fournis par la couche de modélisation.
// Typage dynamique : une valeur numérique (réel, entier, rationnel exact, complexe),
// une poignée d'opérateur, ou n'importe quoi d'autre (Texte) qui sera refusé.

use std::fmt;

use num_complex::Complex64;
use num_bigint::BigInt;
use num_rational::BigRational;

use super::registre::Poignee;

#[derive(Clone, Debug)]
pub enum Objet {
    Reel(f64),
    Entier(i64),
    Rationnel(BigRational),
    Complexe(Complex64),

    // Jamais convertible : sert à signaler un élément étranger.
    Texte(String),

    // Comparé par IDENTITÉ au registre, jamais par valeur.
    Operateur(Poignee),
}

impl Objet {
    /// Nom court du type (messages d'erreur).
    pub fn type_nom(&self) -> &'static str {
        match self {
            Objet::Reel(_) => "réel",
            Objet::Entier(_) => "entier",
            Objet::Rationnel(_) => "rationnel",
            Objet::Complexe(_) => "complexe",
            Objet::Texte(_) => "texte",
            Objet::Operateur(_) => "opérateur",
        }
    }

    pub fn poignee(&self) -> Option<&Poignee> {
        match self {
            Objet::Operateur(p) => Some(p),
            _ => None,
        }
    }
}

impl fmt::Display for Objet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Objet::Reel(x) => write!(f, "{x}"),
            Objet::Entier(n) => write!(f, "{n}"),
            Objet::Rationnel(r) => write!(f, "{r}"),
            Objet::Complexe(z) => write!(f, "{z}"),
            Objet::Texte(s) => write!(f, "{s:?}"),
            Objet::Operateur(p) => write!(f, "<{}>", p.nom()),
        }
    }
}

impl From<f64> for Objet {
    fn from(x: f64) -> Self {
        Objet::Reel(x)
    }
}

impl From<i64> for Objet {
    fn from(n: i64) -> Self {
        Objet::Entier(n)
    }
}

impl From<BigInt> for Objet {
    fn from(n: BigInt) -> Self {
        Objet::Rationnel(BigRational::from_integer(n))
    }
}

impl From<BigRational> for Objet {
    fn from(r: BigRational) -> Self {
        Objet::Rationnel(r)
    }
}

impl From<Complex64> for Objet {
    fn from(z: Complex64) -> Self {
        Objet::Complexe(z)
    }
}

impl From<&Poignee> for Objet {
    fn from(p: &Poignee) -> Self {
        Objet::Operateur(p.clone())
    }
}

impl From<Poignee> for Objet {
    fn from(p: Poignee) -> Self {
        Objet::Operateur(p)
    }
}

impl From<&str> for Objet {
    fn from(s: &str) -> Self {
        Objet::Texte(s.to_string())
    }
}
