// src/noyau/format.rs
//
// Affichage (diagnostic) d'une expression classée.
// - format_jetons : forme polonaise telle quelle, "+ 2 || 4 4"
// - format_infixe : forme infixe entièrement parenthésée, "(2 + (4 || 4))"
//
// Affichage seulement : aucune lecture de texte dans l'autre sens.

use super::domaine::Domaine;
use super::erreur::{ErreurEval, ResultatEval};
use super::jetons::Jeton;

pub const SYMBOLE_PARALLELE: &str = "||";
pub const SYMBOLE_SERIE: &str = "+";

fn symbole<N>(j: &Jeton<N>) -> &'static str {
    match j {
        Jeton::Parallele => SYMBOLE_PARALLELE,
        _ => SYMBOLE_SERIE,
    }
}

/// Liste de jetons en texte, dans l'ordre d'entrée.
pub fn format_jetons<N: Domaine>(jetons: &[Jeton<N>]) -> String {
    jetons
        .iter()
        .map(|j| match j {
            Jeton::Valeur(v) => format!("{v}"),
            op => symbole(op).to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Forme infixe parenthésée. Même balayage droite -> gauche que la réduction,
/// mais sur une pile de chaînes (allouée : c'est un outil de diagnostic).
pub fn format_infixe<N: Domaine>(jetons: &[Jeton<N>]) -> ResultatEval<String> {
    if jetons.is_empty() {
        return Err(ErreurEval::ExpressionVide);
    }

    let mut pile: Vec<String> = Vec::with_capacity(jetons.len() / 2 + 1);

    for (i, j) in jetons.iter().enumerate().rev() {
        match j {
            Jeton::Valeur(v) => pile.push(format!("{v}")),
            op => {
                let premier = pile
                    .pop()
                    .ok_or_else(|| ErreurEval::malformee(i, "opérateur sans deux opérandes"))?;
                let second = pile
                    .pop()
                    .ok_or_else(|| ErreurEval::malformee(i, "opérateur sans deux opérandes"))?;
                pile.push(format!("({premier} {} {second})", symbole(op)));
            }
        }
    }

    if pile.len() != 1 {
        return Err(ErreurEval::malformee(0, "opérandes en surnombre"));
    }
    pile.pop()
        .ok_or_else(|| ErreurEval::malformee(0, "pile vide"))
}
