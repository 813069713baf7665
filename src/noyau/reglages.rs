//! src/noyau/reglages.rs
//!
//! Réglages de l'évaluateur (sans logique d'évaluation).
//!
//! - mode parallèle : NonStrict (a·b/(a+b)) par défaut, Strict (admittances) en option
//! - garde-fou optionnel sur la longueur des expressions (aucun par défaut)

use super::domaine::ModeParallele;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reglages {
    pub mode: ModeParallele,

    // None : toute expression bien formée est évaluée, quelle que soit sa longueur
    pub longueur_max: Option<usize>,
}

impl Reglages {
    pub fn avec_mode(mut self, mode: ModeParallele) -> Self {
        self.mode = mode;
        self
    }

    pub fn avec_longueur_max(mut self, max: usize) -> Self {
        self.longueur_max = Some(max);
        self
    }
}
