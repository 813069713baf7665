// src/noyau/registre.rs
//
// Registre des opérateurs
// -----------------------
// - Deux poignées opaques (parallèle, série) fournies par la couche de modélisation.
// - Classement d'un élément par IDENTITÉ (pointeur), jamais par valeur :
//   un nombre ne peut donc jamais être confondu avec un marqueur d'opérateur.
// - Le registre ne possède pas les poignées (Weak) : elles appartiennent à l'appelant.
// - La paire est publiée d'un bloc sous RwLock : un lecteur voit l'ancienne
//   liaison ou la nouvelle, jamais un mélange des deux.

use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::{MappedRwLockReadGuard, RwLock, RwLockReadGuard};
use tracing::{debug, warn};

use super::erreur::{ErreurEval, ResultatEval};
use super::objet::Objet;

struct Marque {
    nom: String,
}

/// Poignée d'opérateur : identité opaque, clonable à bas coût.
///
/// Deux poignées créées séparément sont toujours distinctes, même avec le même nom.
#[derive(Clone)]
pub struct Poignee(Arc<Marque>);

impl Poignee {
    pub fn nouvelle(nom: impl Into<String>) -> Self {
        Poignee(Arc::new(Marque { nom: nom.into() }))
    }

    pub fn nom(&self) -> &str {
        &self.0.nom
    }

    /// Identité (et non égalité de nom).
    pub fn meme(&self, autre: &Poignee) -> bool {
        Arc::ptr_eq(&self.0, &autre.0)
    }

    fn affaiblir(&self) -> Weak<Marque> {
        Arc::downgrade(&self.0)
    }

    // Weak garde l'allocation vivante : l'adresse ne peut pas être réutilisée.
    fn designe(&self, cible: &Weak<Marque>) -> bool {
        std::ptr::eq(Arc::as_ptr(&self.0), cible.as_ptr())
    }
}

impl PartialEq for Poignee {
    fn eq(&self, other: &Self) -> bool {
        self.meme(other)
    }
}

impl Eq for Poignee {}

impl fmt::Debug for Poignee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Poignee({:?} @ {:p})", self.0.nom, Arc::as_ptr(&self.0))
    }
}

/// Rôle d'un élément après classement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Valeur,
    Parallele,
    Serie,
}

struct Liaison {
    parallele: Weak<Marque>,
    serie: Weak<Marque>,
}

impl Liaison {
    #[inline]
    fn classer(&self, objet: &Objet) -> Role {
        match objet.poignee() {
            // parallèle d'abord : si la même poignée est liée deux fois, parallèle gagne
            Some(p) if p.designe(&self.parallele) => Role::Parallele,
            Some(p) if p.designe(&self.serie) => Role::Serie,
            _ => Role::Valeur,
        }
    }
}

/// Liaison des deux opérateurs, propre à une instance d'évaluateur.
pub struct RegistreOperateurs {
    liaison: RwLock<Option<Liaison>>,
}

impl Default for RegistreOperateurs {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistreOperateurs {
    /// Registre non initialisé : toute évaluation échoue tant que `initialiser` n'a pas eu lieu.
    pub fn new() -> Self {
        Self {
            liaison: RwLock::new(None),
        }
    }

    /// Lie (ou relie) les deux poignées. Remplace entièrement la liaison précédente.
    pub fn initialiser(&self, parallele: &Poignee, serie: &Poignee) {
        if parallele.meme(serie) {
            warn!(
                target: "reseau_polonais::registre",
                poignee = parallele.nom(),
                "même poignée pour parallèle et série: parallèle sera prioritaire"
            );
        }

        let nouvelle = Liaison {
            parallele: parallele.affaiblir(),
            serie: serie.affaiblir(),
        };

        let ancienne = self.liaison.write().replace(nouvelle);

        debug!(
            target: "reseau_polonais::registre",
            parallele = parallele.nom(),
            serie = serie.nom(),
            reliaison = ancienne.is_some(),
            "opérateurs liés"
        );
    }

    pub fn est_initialise(&self) -> bool {
        self.liaison.read().is_some()
    }

    /// Classe un seul élément (verrou pris le temps de l'appel).
    pub fn classer(&self, objet: &Objet) -> ResultatEval<Role> {
        Ok(self.lire()?.classer(objet))
    }

    /// Vue cohérente de la liaison, tenue pendant toute une évaluation.
    pub fn lire(&self) -> ResultatEval<VueRegistre<'_>> {
        RwLockReadGuard::try_map(self.liaison.read(), |l| l.as_ref())
            .map(VueRegistre)
            .map_err(|_| ErreurEval::OperateursNonInitialises)
    }
}

/// Lecture de la liaison courante (garde en lecture).
pub struct VueRegistre<'a>(MappedRwLockReadGuard<'a, Liaison>);

impl VueRegistre<'_> {
    /// O(1) : deux comparaisons de pointeurs au plus.
    #[inline]
    pub fn classer(&self, objet: &Objet) -> Role {
        self.0.classer(objet)
    }
}
