//! Tests par propriétés (proptest) de la réduction série/parallèle.

use num_complex::Complex64;
use proptest::prelude::*;

use super::{EvaluateurComplexe, EvaluateurReel, Objet, Poignee};

struct Banc {
    par: Poignee,
    ser: Poignee,
    reel: EvaluateurReel,
    complexe: EvaluateurComplexe,
}

impl Banc {
    fn new() -> Self {
        let par = Poignee::nouvelle("||");
        let ser = Poignee::nouvelle("+");
        let reel = EvaluateurReel::default();
        reel.initialiser_operateurs(&par, &ser);
        let complexe = EvaluateurComplexe::default();
        complexe.initialiser_operateurs(&par, &ser);
        Self {
            par,
            ser,
            reel,
            complexe,
        }
    }

    fn p(&self) -> Objet {
        Objet::from(&self.par)
    }

    fn s(&self) -> Objet {
        Objet::from(&self.ser)
    }
}

// Impédances strictement positives : pas de 0 ‖ 0
fn impedance() -> impl Strategy<Value = f64> {
    1.0e-3f64..1.0e6f64
}

fn impedance_complexe() -> impl Strategy<Value = Complex64> {
    (1.0e-3f64..1.0e4, -1.0e4f64..1.0e4).prop_map(|(re, im)| Complex64::new(re, im))
}

fn proche(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-12 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #[test]
    fn valeur_seule_exacte(v in any::<f64>()) {
        let b = Banc::new();
        let r = b.reel.evaluer(&[v.into()]).unwrap();
        prop_assert_eq!(r.to_bits(), v.to_bits());
    }

    #[test]
    fn serie_et_parallele_reel(x in impedance(), y in impedance()) {
        let b = Banc::new();
        prop_assert_eq!(b.reel.evaluer(&[b.s(), x.into(), y.into()]).unwrap(), x + y);
        prop_assert_eq!(
            b.reel.evaluer(&[b.p(), x.into(), y.into()]).unwrap(),
            x * y / (x + y)
        );
    }

    #[test]
    fn serie_et_parallele_complexe(x in impedance_complexe(), y in impedance_complexe()) {
        let b = Banc::new();
        prop_assert_eq!(b.complexe.evaluer(&[b.s(), x.into(), y.into()]).unwrap(), x + y);
        prop_assert_eq!(
            b.complexe.evaluer(&[b.p(), x.into(), y.into()]).unwrap(),
            x * y / (x + y)
        );
    }

    #[test]
    fn parallele_commutatif(x in impedance(), y in impedance()) {
        let b = Banc::new();
        let xy = b.reel.evaluer(&[b.p(), x.into(), y.into()]).unwrap();
        let yx = b.reel.evaluer(&[b.p(), y.into(), x.into()]).unwrap();
        prop_assert!(proche(xy, yx));
    }

    #[test]
    fn serie_associative(x in impedance(), y in impedance(), z in impedance()) {
        let b = Banc::new();
        let droite = b.reel.evaluer(&[b.s(), x.into(), b.s(), y.into(), z.into()]).unwrap();
        let gauche = b.reel.evaluer(&[b.s(), b.s(), x.into(), y.into(), z.into()]).unwrap();
        prop_assert!(proche(droite, gauche));
    }

    #[test]
    fn parallele_associatif(x in impedance(), y in impedance(), z in impedance()) {
        let b = Banc::new();
        let droite = b.reel.evaluer(&[b.p(), x.into(), b.p(), y.into(), z.into()]).unwrap();
        let gauche = b.reel.evaluer(&[b.p(), b.p(), x.into(), y.into(), z.into()]).unwrap();
        prop_assert!(proche(droite, gauche));
    }

    #[test]
    fn parallele_inferieur_au_minimum(x in impedance(), y in impedance()) {
        let b = Banc::new();
        let r = b.reel.evaluer(&[b.p(), x.into(), y.into()]).unwrap();
        prop_assert!(r <= x.min(y) * (1.0 + 1e-12));
    }

    #[test]
    fn lot_egal_sequentiel(valeurs in prop::collection::vec(impedance(), 1..64)) {
        let b = Banc::new();
        let lot: Vec<Vec<Objet>> = valeurs
            .windows(2)
            .map(|w| vec![b.s(), w[0].into(), b.p(), w[1].into(), w[0].into()])
            .collect();

        let par_lot = b.reel.evaluer_lot(&lot);
        prop_assert_eq!(par_lot.len(), lot.len());
        for (expr, r) in lot.iter().zip(par_lot) {
            prop_assert_eq!(r, b.reel.evaluer(expr));
        }
    }
}
