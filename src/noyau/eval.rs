//! Noyau — évaluation (pipeline réel)
//!
//! liaison (registre) -> classement + conversion -> réduction en place -> valeur
//!
//! Remarque : le classement se fait sous UNE lecture du registre, pour que toute
//! l'expression voie la même paire d'opérateurs même si une reliaison a lieu
//! en parallèle.

use std::marker::PhantomData;

use num_complex::Complex64;
use rayon::prelude::*;
use tracing::{debug, trace};

use super::domaine::Domaine;
use super::erreur::{ErreurEval, ResultatEval};
use super::format::{format_infixe, format_jetons};
use super::jetons::{Jeton, Tampon};
use super::objet::Objet;
use super::polonaise::reduire;
use super::reglages::Reglages;
use super::registre::{Poignee, RegistreOperateurs, Role, VueRegistre};

/// Évaluateur série/parallèle sur le domaine `N` (f64 ou Complex64).
///
/// Chaque instance possède sa propre liaison d'opérateurs : plusieurs
/// évaluateurs configurés différemment peuvent coexister.
pub struct Evaluateur<N> {
    registre: RegistreOperateurs,
    reglages: Reglages,
    _domaine: PhantomData<fn() -> N>,
}

pub type EvaluateurReel = Evaluateur<f64>;
pub type EvaluateurComplexe = Evaluateur<Complex64>;

impl<N: Domaine> Default for Evaluateur<N> {
    fn default() -> Self {
        Self::new(Reglages::default())
    }
}

impl<N: Domaine> Evaluateur<N> {
    pub fn new(reglages: Reglages) -> Self {
        Self {
            registre: RegistreOperateurs::new(),
            reglages,
            _domaine: PhantomData,
        }
    }

    pub fn reglages(&self) -> &Reglages {
        &self.reglages
    }

    pub fn registre(&self) -> &RegistreOperateurs {
        &self.registre
    }

    /// À appeler avant toute évaluation ; un nouvel appel remplace la liaison.
    pub fn initialiser_operateurs(&self, parallele: &Poignee, serie: &Poignee) {
        self.registre.initialiser(parallele, serie);
    }

    pub fn classer(&self, objet: &Objet) -> ResultatEval<Role> {
        self.registre.classer(objet)
    }

    /// API publique : réduit une expression polonaise à une valeur.
    ///
    /// Alloue un tampon à chaque appel ; pour un balayage, préférer `evaluer_avec`.
    pub fn evaluer(&self, expression: &[Objet]) -> ResultatEval<N> {
        let mut tampon = Tampon::avec_capacite(expression.len());
        self.evaluer_avec(expression, &mut tampon)
    }

    /// Comme `evaluer`, avec un tampon fourni (aucune allocation si sa capacité suffit).
    pub fn evaluer_avec(&self, expression: &[Objet], tampon: &mut Tampon<N>) -> ResultatEval<N> {
        let res = self
            .charger(expression, tampon)
            .and_then(|()| reduire(&mut tampon.jetons, self.reglages.mode));

        if let Err(e) = &res {
            trace!(
                target: "reseau_polonais::eval",
                domaine = N::NOM,
                longueur = expression.len(),
                erreur = %e,
                "évaluation refusée"
            );
        }
        res
    }

    /// Forme infixe parenthésée (diagnostic), ex. "(2 + (4 || 4))".
    pub fn decrire(&self, expression: &[Objet]) -> ResultatEval<String> {
        let mut tampon = Tampon::avec_capacite(expression.len());
        self.charger(expression, &mut tampon)?;
        format_infixe(&tampon.jetons)
    }

    /// Évalue un lot d'expressions en parallèle (rayon), un tampon par worker.
    /// Résultats dans l'ordre d'entrée ; une erreur n'affecte que son expression.
    pub fn evaluer_lot<E>(&self, expressions: &[E]) -> Vec<ResultatEval<N>>
    where
        E: AsRef<[Objet]> + Sync,
    {
        debug!(
            target: "reseau_polonais::eval",
            domaine = N::NOM,
            expressions = expressions.len(),
            "évaluation par lot"
        );

        expressions
            .par_iter()
            .map_init(Tampon::<N>::new, |tampon, expr| {
                self.evaluer_avec(expr.as_ref(), tampon)
            })
            .collect()
    }

    /// Classement + conversion de toute l'expression dans le tampon.
    fn charger(&self, expression: &[Objet], tampon: &mut Tampon<N>) -> ResultatEval<()> {
        // d'abord la liaison : sans elle, rien n'est interprétable
        let vue = self.registre.lire()?;

        if expression.is_empty() {
            return Err(ErreurEval::ExpressionVide);
        }
        if let Some(max) = self.reglages.longueur_max {
            if expression.len() > max {
                return Err(ErreurEval::ExpressionTropLongue {
                    longueur: expression.len(),
                    max,
                });
            }
        }

        tampon.preparer(expression.len());
        for (position, objet) in expression.iter().enumerate() {
            tampon.jetons.push(classer_jeton(&vue, objet, position)?);
        }

        trace!(
            target: "reseau_polonais::eval",
            jetons = %format_jetons(&tampon.jetons),
            "expression classée"
        );
        Ok(())
    }
}

fn classer_jeton<N: Domaine>(
    vue: &VueRegistre<'_>,
    objet: &Objet,
    position: usize,
) -> ResultatEval<Jeton<N>> {
    match vue.classer(objet) {
        Role::Parallele => Ok(Jeton::Parallele),
        Role::Serie => Ok(Jeton::Serie),
        Role::Valeur => N::depuis_objet(objet)
            .map(Jeton::Valeur)
            .ok_or_else(|| ErreurEval::ElementInvalide {
                position,
                detail: format!(
                    "{} {objet} non convertible en {}",
                    objet.type_nom(),
                    N::NOM
                ),
            }),
    }
}
