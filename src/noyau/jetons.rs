// src/noyau/jetons.rs

use super::domaine::Domaine;
use super::registre::Role;

/// Élément classé : une valeur du domaine ou l'un des deux opérateurs.
///
/// Le tampon de travail est un tableau de `Jeton<N>` : les cases déjà
/// consommées par le balayage servent de pile (elles ne contiennent alors
/// que des `Valeur`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Jeton<N> {
    Valeur(N),
    Parallele,
    Serie,
}

impl<N: Domaine> Jeton<N> {
    pub fn role(&self) -> Role {
        match self {
            Jeton::Valeur(_) => Role::Valeur,
            Jeton::Parallele => Role::Parallele,
            Jeton::Serie => Role::Serie,
        }
    }
}

/// Tampon de travail réutilisable : une allocation pour tout un balayage.
#[derive(Clone, Debug)]
pub struct Tampon<N> {
    pub(crate) jetons: Vec<Jeton<N>>,
}

impl<N> Default for Tampon<N> {
    fn default() -> Self {
        Self { jetons: Vec::new() }
    }
}

impl<N: Domaine> Tampon<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn avec_capacite(capacite: usize) -> Self {
        Self {
            jetons: Vec::with_capacity(capacite),
        }
    }

    pub fn capacite(&self) -> usize {
        self.jetons.capacity()
    }

    /// Vide le tampon et réserve `n` cases (sans réallouer si la capacité suffit).
    pub(crate) fn preparer(&mut self, n: usize) {
        self.jetons.clear();
        self.jetons.reserve(n);
    }
}
