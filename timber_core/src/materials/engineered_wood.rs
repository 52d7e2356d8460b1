//! Engineered Wood Products
//!
//! - **Prolam glulam** (φ = 0.8 per ZZ2.3(a)), dry and wet variants
//! - **LVL** (φ = 0.9 per ZZ2.3(b)), no wet variants
//!
//! ρb for these products comes from Eq. E2(1),
//! ρb = 14.71·(E/f'b)^-0.480·r^-0.061, evaluated at r = 0.25 with the
//! manufacturer E and f'b values.

use super::{MaterialGrade, ProductFamily};

/// Dry/wet property pair for one Prolam grade.
struct ProlamGrade {
    name: &'static str,
    dry: (f64, f64, f64),
    wet: (f64, f64, f64),
    rho_b: f64,
}

// (f'b, E, density) dry and wet; f's/f'p are common to every Prolam grade
const PROLAM: [ProlamGrade; 4] = [
    ProlamGrade { name: "Prolam PL8", dry: (19.0, 8000.0, 500.0), wet: (15.2, 6400.0, 600.0), rho_b: 0.88 },
    ProlamGrade { name: "Prolam PL10", dry: (22.0, 10000.0, 530.0), wet: (17.6, 8000.0, 630.0), rho_b: 0.85 },
    ProlamGrade { name: "Prolam PL12", dry: (25.0, 11500.0, 560.0), wet: (20.0, 9200.0, 660.0), rho_b: 0.84 },
    ProlamGrade { name: "Prolam PL17", dry: (42.0, 16700.0, 620.0), wet: (33.6, 13400.0, 720.0), rho_b: 0.91 },
];

const PROLAM_DRY_FS: f64 = 3.7;
const PROLAM_DRY_FP: f64 = 8.9;
const PROLAM_WET_FS: f64 = 2.5;
const PROLAM_WET_FP: f64 = 5.3;

fn glulam_grades() -> impl Iterator<Item = MaterialGrade> {
    PROLAM.iter().flat_map(|p| {
        let wet_name = format!("{} Wet", p.name);
        let (fb, e, density) = p.dry;
        let dry = MaterialGrade {
            name: p.name.to_string(),
            family: ProductFamily::Glulam,
            fb_mpa: fb,
            fs_mpa: Some(PROLAM_DRY_FS),
            fp_mpa: Some(PROLAM_DRY_FP),
            e_mpa: e,
            phi: 0.8,
            k2: 1.5,
            density_kg_m3: density,
            rho_b: p.rho_b,
            wet_variant: Some(wet_name.clone()),
        };
        let (fb, e, density) = p.wet;
        let wet = MaterialGrade {
            name: wet_name,
            family: ProductFamily::Glulam,
            fb_mpa: fb,
            fs_mpa: Some(PROLAM_WET_FS),
            fp_mpa: Some(PROLAM_WET_FP),
            e_mpa: e,
            phi: 0.8,
            k2: 1.5,
            density_kg_m3: density,
            rho_b: p.rho_b,
            wet_variant: None,
        };
        [dry, wet]
    })
}

fn lvl(name: &str, fb: f64, fs: f64, fp: f64, e: f64, rho_b: f64) -> MaterialGrade {
    MaterialGrade {
        name: name.to_string(),
        family: ProductFamily::Lvl,
        fb_mpa: fb,
        fs_mpa: Some(fs),
        fp_mpa: Some(fp),
        e_mpa: e,
        phi: 0.9,
        k2: 2.0,
        density_kg_m3: 600.0,
        rho_b,
        wet_variant: None,
    }
}

pub(crate) fn grades() -> Vec<MaterialGrade> {
    let mut grades: Vec<MaterialGrade> = glulam_grades().collect();
    grades.extend([
        lvl("hySPAN", 48.0, 4.6, 12.0, 13200.0, 1.08),
        lvl("LVL", 42.0, 4.6, 12.0, 13200.0, 1.01),
        lvl("hyONE", 48.0, 4.6, 12.0, 16000.0, 0.99),
        lvl("hyCHORD", 48.0, 4.6, 11.11, 11000.0, 1.18),
        lvl("Nelson Pine", 42.0, 5.0, 12.0, 10700.0, 1.12),
        lvl("hy90", 34.0, 4.6, 12.0, 9500.0, 1.07),
    ]);
    grades
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prolam_pairs() {
        let g = grades();
        let pl17 = g.iter().find(|m| m.name == "Prolam PL17").unwrap();
        assert_eq!(pl17.fb_mpa, 42.0);
        assert_eq!(pl17.wet_variant.as_deref(), Some("Prolam PL17 Wet"));
        let wet = g.iter().find(|m| m.name == "Prolam PL17 Wet").unwrap();
        assert_eq!(wet.e_mpa, 13400.0);
        assert_eq!(wet.fs_mpa, Some(2.5));
    }

    #[test]
    fn test_lvl_family_values() {
        let g = grades();
        let lvl_count = g.iter().filter(|m| m.family == ProductFamily::Lvl).count();
        assert_eq!(lvl_count, 6);
        assert!(g
            .iter()
            .filter(|m| m.family == ProductFamily::Lvl)
            .all(|m| m.phi == 0.9 && m.k2 == 2.0));
    }
}
