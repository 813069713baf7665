//! Noyau de réduction série/parallèle
//!
//! Organisation interne :
//! - objet.rs       : éléments externes (valeurs dynamiques + poignées)
//! - registre.rs    : liaison des deux poignées d'opérateurs, classement par identité
//! - jetons.rs      : jetons classés + tampon de travail réutilisable
//! - domaine.rs     : domaine numérique (f64 / Complex64), règles série/parallèle
//! - polonaise.rs   : réduction droite -> gauche en place
//! - eval.rs        : pipeline complet (Evaluateur)
//! - format.rs      : affichage polonais / infixe (diagnostic)
//! - composants.rs  : impédances L/C pour les balayages
//! - reglages.rs    : réglages (mode parallèle, garde-fou de longueur optionnel)
//! - erreur.rs      : erreurs

pub mod composants;
pub mod domaine;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod objet;
pub mod polonaise;
pub mod reglages;
pub mod registre;



#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use domaine::{Domaine, ModeParallele};
pub use erreur::{ErreurEval, ResultatEval};
pub use eval::{Evaluateur, EvaluateurComplexe, EvaluateurReel};
pub use jetons::{Jeton, Tampon};
pub use objet::Objet;
pub use registre::{Poignee, RegistreOperateurs, Role};
pub use reglages::Reglages;
