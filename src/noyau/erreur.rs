// src/noyau/erreur.rs
//
// Erreurs du noyau : une évaluation échoue entièrement ou pas du tout
// (aucun résultat partiel, aucune reprise interne).

use thiserror::Error;

pub type ResultatEval<T> = Result<T, ErreurEval>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurEval {
    /// `evaluer` appelé avant `initialiser_operateurs`.
    #[error("opérateurs non initialisés (appeler initialiser_operateurs avant d'évaluer)")]
    OperateursNonInitialises,

    /// Élément ni poignée d'opérateur, ni convertible dans le domaine actif.
    #[error("élément invalide en position {position}: {detail}")]
    ElementInvalide { position: usize, detail: String },

    /// Arité incohérente : trop ou pas assez d'opérateurs pour les valeurs.
    #[error("expression malformée en position {position}: {raison}")]
    ExpressionMalformee {
        position: usize,
        raison: &'static str,
    },

    #[error("expression vide")]
    ExpressionVide,

    /// Garde-fou optionnel (`Reglages::longueur_max`, désactivé par défaut).
    #[error("expression trop longue: {longueur} éléments (max {max})")]
    ExpressionTropLongue { longueur: usize, max: usize },
}

impl ErreurEval {
    pub(crate) fn malformee(position: usize, raison: &'static str) -> Self {
        ErreurEval::ExpressionMalformee { position, raison }
    }

    /// Vrai pour les erreurs dues à la forme de l'entrée (pas à la liaison).
    pub fn est_erreur_entree(&self) -> bool {
        !matches!(self, ErreurEval::OperateursNonInitialises)
    }
}
