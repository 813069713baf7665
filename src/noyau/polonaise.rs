// src/noyau/polonaise.rs
//
// Réduction polonaise (préfixe) -> une seule valeur
// -------------------------------------------------
// Balayage de droite à gauche, le tableau d'entrée servant lui-même de pile :
// - i   : curseur de balayage (n-1 au départ ; la case n-1 est "déjà empilée")
// - bas : case la plus basse de la pile, qui occupe [bas, n)
//
// Règles:
// - Valeur    : bas -= 1 puis pile[bas] = valeur (si bas vaut alors i, la valeur
//               reste dans sa propre case)
// - Opérateur : b = pile[bas] (1er opérande), a = pile[bas+1] (2e opérande),
//               bas += 1, pile[bas] = a ‖ b  ou  a + b
// - Fin       : exactement une valeur dans la pile, en pile[n-1]
//
// Invariant : bas > i avant chaque lecture de la case i, donc la pile n'écrase
// jamais une case pas encore lue. Toutes les lectures/écritures passent par get/get_mut :
// une expression malformée donne une erreur, jamais une lecture hors tableau.

use super::domaine::{Domaine, ModeParallele};
use super::erreur::{ErreurEval, ResultatEval};
use super::jetons::Jeton;

/// Réduit en place une expression déjà classée.
///
/// Exemple (réel) : `[Serie, 2, Parallele, 4, 4]` => 2 + (4 ‖ 4) = 4
///
/// Le contenu de `pile` est indéterminé après l'appel (il a servi de pile).
pub fn reduire<N: Domaine>(pile: &mut [Jeton<N>], mode: ModeParallele) -> ResultatEval<N> {
    let n = pile.len();
    if n == 0 {
        return Err(ErreurEval::ExpressionVide);
    }

    let mut i = n - 1;
    let mut bas = n - 1;

    while i > 0 {
        i -= 1;

        match lire_jeton(pile, i)? {
            Jeton::Valeur(v) => {
                bas -= 1; // bas > i >= 0
                ecrire(pile, bas, v, i)?;
            }

            op => {
                if n - bas < 2 {
                    return Err(ErreurEval::malformee(i, "opérateur sans deux opérandes"));
                }

                let b = lire_valeur(pile, bas, i)?;
                let a = lire_valeur(pile, bas + 1, i)?;

                let r = match op {
                    Jeton::Parallele => N::parallele(a, b, mode),
                    _ => N::serie(a, b),
                };

                bas += 1;
                ecrire(pile, bas, r, i)?;
            }
        }
    }

    if n - bas != 1 {
        return Err(ErreurEval::malformee(0, "opérandes en surnombre"));
    }

    lire_valeur(pile, bas, n - 1)
}

#[inline]
fn lire_jeton<N: Domaine>(pile: &[Jeton<N>], k: usize) -> ResultatEval<Jeton<N>> {
    pile.get(k)
        .copied()
        .ok_or_else(|| ErreurEval::malformee(k, "hors du tampon"))
}

#[inline]
fn lire_valeur<N: Domaine>(pile: &[Jeton<N>], k: usize, position: usize) -> ResultatEval<N> {
    match pile.get(k) {
        Some(Jeton::Valeur(v)) => Ok(*v),
        // la dernière case (pré-empilée) doit être une feuille
        Some(_) => Err(ErreurEval::malformee(position, "opérande attendu, opérateur trouvé")),
        None => Err(ErreurEval::malformee(position, "pile hors du tampon")),
    }
}

#[inline]
fn ecrire<N: Domaine>(pile: &mut [Jeton<N>], k: usize, v: N, position: usize) -> ResultatEval<()> {
    let case = pile
        .get_mut(k)
        .ok_or_else(|| ErreurEval::malformee(position, "pile hors du tampon"))?;
    *case = Jeton::Valeur(v);
    Ok(())
}
