// src/noyau/domaine.rs
//
// Domaine numérique de l'évaluateur (réel f64 ou complexe Complex64).
// L'algorithme de réduction est le même : seules +, *, / changent.

use std::fmt::{Debug, Display};

use num_complex::Complex64;
use num_traits::{Num, ToPrimitive};

use super::objet::Objet;

/// Règle de combinaison parallèle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeParallele {
    /// a·b/(a+b), tel quel (le plus rapide ; 0 ‖ 0 donne NaN).
    #[default]
    NonStrict,
    /// Par admittances : 0 si un opérande est nul, +∞ si l'admittance totale est nulle.
    Strict,
}

pub trait Domaine: Num + Copy + Send + Sync + Debug + Display + 'static {
    /// Nom court (journalisation).
    const NOM: &'static str;

    /// Conversion d'un élément externe ; None si non convertible.
    fn depuis_objet(objet: &Objet) -> Option<Self>;

    fn infini() -> Self;

    #[inline]
    fn serie(a: Self, b: Self) -> Self {
        a + b
    }

    #[inline]
    fn parallele(a: Self, b: Self, mode: ModeParallele) -> Self {
        match mode {
            ModeParallele::NonStrict => a * b / (a + b),
            ModeParallele::Strict => parallele_strict(a, b),
        }
    }
}

fn parallele_strict<N: Domaine>(a: N, b: N) -> N {
    // une impédance nulle court-circuite tout le reste
    if a.is_zero() || b.is_zero() {
        return N::zero();
    }
    let admittance = N::one() / a + N::one() / b;
    if admittance.is_zero() {
        N::infini()
    } else {
        N::one() / admittance
    }
}

impl Domaine for f64 {
    const NOM: &'static str = "réel";

    fn depuis_objet(objet: &Objet) -> Option<Self> {
        match objet {
            Objet::Reel(x) => Some(*x),
            Objet::Entier(n) => Some(*n as f64),
            Objet::Rationnel(r) => r.to_f64(),
            // pas de troncature silencieuse de la partie imaginaire
            Objet::Complexe(_) | Objet::Texte(_) | Objet::Operateur(_) => None,
        }
    }

    fn infini() -> Self {
        f64::INFINITY
    }
}

impl Domaine for Complex64 {
    const NOM: &'static str = "complexe";

    fn depuis_objet(objet: &Objet) -> Option<Self> {
        match objet {
            Objet::Complexe(z) => Some(*z),
            Objet::Reel(x) => Some(Complex64::new(*x, 0.0)),
            Objet::Entier(n) => Some(Complex64::new(*n as f64, 0.0)),
            Objet::Rationnel(r) => r.to_f64().map(|x| Complex64::new(x, 0.0)),
            Objet::Texte(_) | Objet::Operateur(_) => None,
        }
    }

    fn infini() -> Self {
        Complex64::new(f64::INFINITY, 0.0)
    }
}
