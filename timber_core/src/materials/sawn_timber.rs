//! Sawn Timber Grades (NZS AS 1720.1:2022 Table ZZ2.1)
//!
//! NZ radiata pine: φ = 0.8 per ZZ2.3(a), f's = 3.8 MPa (Note 1),
//! f'p = 6.9 MPa (Note 2). ρb from Table ZZ3.1.

use super::{MaterialGrade, ProductFamily};

pub(crate) fn grades() -> Vec<MaterialGrade> {
    vec![
        MaterialGrade {
            name: "SG8".to_string(),
            family: ProductFamily::SawnTimber,
            fb_mpa: 14.0,
            fs_mpa: Some(3.8),
            fp_mpa: Some(6.9),
            e_mpa: 8000.0,
            phi: 0.8,
            k2: 2.0,
            density_kg_m3: 450.0,
            rho_b: 0.76,
            wet_variant: Some("SG8 Wet in Use".to_string()),
        },
        MaterialGrade {
            name: "SG8 Wet in Use".to_string(),
            family: ProductFamily::SawnTimber,
            fb_mpa: 11.7,
            fs_mpa: Some(2.4),
            fp_mpa: Some(5.3),
            e_mpa: 6500.0,
            phi: 0.8,
            k2: 2.0,
            density_kg_m3: 550.0,
            rho_b: 0.76,
            wet_variant: None,
        },
        // No published shear or bearing values
        MaterialGrade {
            name: "Macrocarpa".to_string(),
            family: ProductFamily::SawnTimber,
            fb_mpa: 87.8,
            fs_mpa: None,
            fp_mpa: None,
            e_mpa: 5790.0,
            phi: 0.8,
            k2: 2.0,
            density_kg_m3: 480.0,
            rho_b: 0.76,
            wet_variant: None,
        },
    ]
}
