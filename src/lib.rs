// src/lib.rs
//
// Réseau polonais — réduction série/parallèle
// -------------------------------------------
// Noyau de calcul appelé en boucle par une couche de modélisation de réseaux :
// - elle construit des expressions polonaises [+, a, ||, b, c] avec deux poignées opaques
// - ici on les réduit à une seule valeur (réel ou complexe), en place, en O(n)
//
// Utilisation :
//   let ev = EvaluateurReel::default();
//   ev.initialiser_operateurs(&par, &ser);
//   let (p, s) = (Objet::from(&par), Objet::from(&ser));
//   let z = ev.evaluer(&[s, 2.0.into(), p.clone(), 4.0.into(), 4.0.into()])?; // 4

pub mod noyau;

pub use noyau::composants::{impedance_capacite, impedance_inductance};
pub use noyau::{
    Domaine, ErreurEval, Evaluateur, EvaluateurComplexe, EvaluateurReel, Jeton, ModeParallele,
    Objet, Poignee, Reglages, ResultatEval, Role, Tampon,
};
