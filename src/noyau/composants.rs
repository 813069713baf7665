// src/noyau/composants.rs
//
// Impédances des composants réactifs, pour construire les entrées d'un balayage
// en fréquence (L, C -> Complex64).

use std::f64::consts::PI;

use num_complex::Complex64;

/// Z_L = j·2πfL
pub fn impedance_inductance(inductance: f64, frequence: f64) -> Complex64 {
    Complex64::new(0.0, 2.0 * PI * frequence * inductance)
}

/// Z_C = 1/(j·2πfC) ; -j∞ en continu (f = 0) ou pour C = 0 (circuit ouvert).
pub fn impedance_capacite(capacite: f64, frequence: f64) -> Complex64 {
    if capacite == 0.0 || frequence == 0.0 {
        return Complex64::new(0.0, f64::NEG_INFINITY);
    }
    Complex64::new(0.0, -1.0 / (2.0 * PI * frequence * capacite))
}
