//! Pipeline tests: platonic counts, table-wide Euler, the irregular cases.

use super::*;
use crate::error::WythoffError;
use crate::symbol::{entries, WythoffSymbol};
use proptest::prelude::*;

fn decomp(text: &str) -> SchwarzDecomposition {
    let sym = WythoffSymbol::parse(text).unwrap();
    decompose_symbol(&sym, &SolverCfg::default()).unwrap()
}

fn counts(d: &SchwarzDecomposition) -> (usize, usize, usize) {
    (d.vertex_count, d.edge_count, d.face_count)
}

#[test]
fn platonic_counts() {
    assert_eq!(counts(&decomp("3|2 3")), (4, 6, 4));
    assert_eq!(counts(&decomp("4|2 3")), (6, 12, 8));
    assert_eq!(counts(&decomp("3|2 4")), (8, 12, 6));
    assert_eq!(counts(&decomp("5|2 3")), (12, 30, 20));
    assert_eq!(counts(&decomp("3|2 5")), (20, 30, 12));
}

#[test]
fn tetrahedron_structure() {
    let d = decomp("3|2 3");
    assert_eq!(d.sides, vec![3.0]);
    assert_eq!(d.rot, vec![0, 0, 0]);
    assert_eq!(d.symmetry, 3);
    assert_eq!(d.order, 24);
    assert_eq!(d.density, 1);
    assert_eq!(d.chi, 2);
    assert!((d.gamma[0] - std::f64::consts::PI / 3.0).abs() < 1e-12);
    assert_eq!(vertex_configuration(&d), "(3.3.3)");
}

#[test]
fn table_reference_and_literal_agree() {
    assert_eq!(decomp("#27"), decomp("5|2 3"));
    assert_eq!(decomp("#17"), decomp("|2 3 4"));
}

#[test]
fn prism_and_antiprism_strip_digons() {
    let prism = decomp("2 5|2");
    assert_eq!(prism.sides, vec![5.0, 4.0]);
    assert_eq!(prism.rot, vec![1, 1, 0]);
    assert_eq!(counts(&prism), (10, 15, 7));

    let anti = decomp("|2 2 5");
    assert_eq!(anti.sides, vec![5.0, 3.0]);
    assert_eq!(anti.rot, vec![1, 1, 1, 0]);
    assert_eq!(anti.snub, Some(vec![true, true, true, false]));
    assert_eq!(counts(&anti), (10, 20, 12));
}

#[test]
fn euler_characteristic_holds_across_table() {
    for e in entries() {
        let d = decomp(&format!("#{}", e.index));
        assert_eq!(d.euler(), d.chi, "#{} {}", e.index, e.name);
    }
}

#[test]
fn every_table_entry_solves() {
    for e in entries() {
        let p = Polyhedron::from_symbol(&format!("#{}", e.index))
            .unwrap_or_else(|err| panic!("#{} {}: {err}", e.index, e.name));
        let d = &p.decomposition;
        assert_eq!(p.geometry.vertices.len(), d.vertex_count, "{}", e.name);
        assert_eq!(p.geometry.face_poles.len(), d.face_count, "{}", e.name);
        assert_eq!(p.geometry.edges.len(), d.edge_count, "{}", e.name);
        assert_eq!(p.name, e.name);
        for v in &p.geometry.vertices {
            assert!((v.norm() - 1.0).abs() < 1e-9);
        }
    }
}

// Known-special inputs: hemi, one-sided, even-denominator rewrite, entry 80.

#[test]
fn octahemioctahedron_is_hemi_but_two_sided() {
    let d = decomp("#8");
    assert!(d.hemi);
    assert!(!d.one_sided);
    assert_eq!(d.density, 0);
    assert_eq!(counts(&d), (12, 24, 12));
}

#[test]
fn tetrahemihexahedron_is_one_sided() {
    let d = decomp("3/2 3|2");
    assert!(d.hemi && d.one_sided);
    assert_eq!(d.chi, 1);
    assert_eq!(counts(&d), (6, 12, 7));
}

#[test]
fn even_denominator_rewrite() {
    let d = decomp("3/2 2 4|");
    assert!(d.one_sided);
    assert_eq!(d.even, Some(2));
    assert_eq!(d.rot, vec![0, 1, 3, 2]);
    assert_eq!(d.face_types(), 4);
    assert!((d.sides[2] - 4.0 / 3.0).abs() < 1e-12);
    assert!((d.gamma[3] + d.gamma[0]).abs() < 1e-15);
    assert_eq!(counts(&d), (24, 48, 18));
    assert_eq!(d.chi, -6);
}

#[test]
fn dirhombic_entry_is_literal_special_case() {
    let d = decomp("#80");
    assert!(d.hemi);
    assert_eq!(d.face_types(), 5);
    assert_eq!(d.valency(), 8);
    assert_eq!(d.rot, vec![0, 3, 0, 1, 0, 2, 0, 4]);
    assert_eq!(d.sides[0], 4.0);
    assert_eq!(d.euler(), d.chi);
}

#[test]
fn invalid_symbols_fail_before_geometry() {
    let err = Polyhedron::from_symbol("7|2 3").unwrap_err();
    assert!(matches!(err, WythoffError::Symbol { ref message, .. } if message.contains("too large")));
    let err = Polyhedron::from_symbol("4 5|3").unwrap_err();
    assert!(matches!(err, WythoffError::Symbol { .. }));
    // 1/3 + 1/3 + 1/3 = 1 tiles the plane.
    let err = Polyhedron::from_symbol("3|3 3").unwrap_err();
    assert!(matches!(err, WythoffError::Symbol { ref message, .. } if message.contains("density")));
}

#[test]
fn convergence_cap_is_reported() {
    let sym = WythoffSymbol::parse("2 3 5|").unwrap();
    let cfg = SolverCfg {
        max_iterations: 0,
        ..SolverCfg::default()
    };
    let err = decompose_symbol(&sym, &cfg).unwrap_err();
    assert!(matches!(err, WythoffError::Convergence { .. }));
}

#[test]
fn gamma_leaving_its_range_is_reported() {
    // Incidence far too small for the angle sum: the first Newton step
    // overshoots past pi.
    let mut d = decomp("2 3|4");
    d.sides = vec![3.0, 3.0];
    d.incidence = vec![0.25, 0.25];
    let err = solve_fundamental_angles("2 3|4", d, &SolverCfg::default()).unwrap_err();
    assert!(matches!(err, WythoffError::Convergence { ref message, .. } if message.contains("out of bounds")));
}

#[test]
fn inconsistent_dihedral_symbols_overflow() {
    let err = Polyhedron::from_symbol("2 2|5/2").unwrap_err();
    assert!(matches!(err, WythoffError::TopologyOverflow { stage: "vertices", .. }), "{err}");
    let err = Polyhedron::from_symbol("3|2 2").unwrap_err();
    assert!(matches!(err, WythoffError::TopologyOverflow { stage: "faces", .. }), "{err}");
    assert!(matches!(
        Polyhedron::from_symbol("5|2 2"),
        Err(WythoffError::TopologyOverflow { .. })
    ));
}

#[test]
fn hexagonal_dihedron_keeps_one_face_type() {
    // `2 2|3` is flagged hemi, yet merging leaves only the hexagons.
    let p = Polyhedron::from_symbol("2 2|3").unwrap();
    let d = &p.decomposition;
    assert!(d.hemi);
    assert_eq!(d.face_types(), 1);
    assert_eq!(counts(d), (6, 6, 2));
    assert_eq!(p.geometry.face_poles.len(), 2);
    assert_eq!(p.geometry.edges.len(), 6);
    assert_eq!(p.geometry.anti.len(), 6);
    assert_eq!(p.name, "6-gonal dihedron");
}

#[test]
fn octahedron_geometry() {
    let p = Polyhedron::from_symbol("4|2 3").unwrap();
    let g = &p.geometry;
    assert_eq!(g.edges.len(), 12);
    assert_eq!(g.face_poles.len(), 8);
    assert!(g.anti.is_empty());
    // Every vertex has four distinct neighbors at 90 degrees.
    for (i, nbrs) in g.adjacency.iter().enumerate() {
        assert_eq!(nbrs.len(), 4);
        for &n in nbrs {
            assert!(g.vertices[i].dot(&g.vertices[n]).abs() < 1e-9);
        }
    }
    // Face poles of a regular polyhedron share one radius.
    let r0 = g.face_poles[0].norm();
    assert!(g.face_poles.iter().all(|p| (p.norm() - r0).abs() < 1e-9));
}

#[test]
fn hemi_edges_carry_direction_flags() {
    let p = Polyhedron::from_symbol("#8").unwrap();
    assert_eq!(p.geometry.anti.len(), p.geometry.dual_edges.len());
}

#[test]
fn non_tabulated_names_are_guessed() {
    let p = decomp("2 7|2");
    let sym = WythoffSymbol::parse("2 7|2").unwrap();
    let (name, dual) = guess_names(&sym, &p);
    assert_eq!(name, "7-gonal prism");
    assert_eq!(dual, "7-gonal dipyramid");
}

#[test]
fn rotation_fixes_axis() {
    let axis = nalgebra::Vector3::new(0.0, 0.0, 1.0);
    let v = nalgebra::Vector3::new(1.0, 0.0, 0.0);
    let r = rotate(&v, &axis, std::f64::consts::FRAC_PI_2);
    assert!((r - nalgebra::Vector3::new(0.0, 1.0, 0.0)).norm() < 1e-12);
    assert!((rotate(&axis, &axis, 1.0) - axis).norm() < 1e-12);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn dihedral_prisms_satisfy_euler(n in 3u32..24) {
        let d = decomp(&format!("2 {n}|2"));
        prop_assert_eq!(counts(&d), (2 * n as usize, 3 * n as usize, n as usize + 2));
        prop_assert_eq!(d.euler(), 2);
    }
}
