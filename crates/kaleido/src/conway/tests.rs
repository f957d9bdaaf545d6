//! Operator counts, orientation and the pairing postcondition.

use std::collections::HashSet;

use super::*;
use crate::cfg::MeshCfg;
use crate::error::ChainError;
use crate::face_builder::build_faces;
use crate::mesh::tests::{cube, strip};
use crate::mesh::{FaceId, HalfedgeId, VertexId};
use crate::wythoff::Polyhedron;
use proptest::prelude::*;

fn solid(symbol: &str) -> Mesh {
    let p = Polyhedron::from_symbol(symbol).unwrap();
    let faces = build_faces(&p).unwrap();
    Mesh::from_polygon_faces(&p.geometry.vertices, &faces, &MeshCfg::default()).unwrap()
}

fn counts(m: &Mesh) -> (usize, usize, usize) {
    (m.vertex_count(), m.edge_count(), m.face_count())
}

/// Pairs are mutual and the unpaired half-edges are exactly the boundary loops.
fn assert_paired(m: &Mesh) {
    m.validate().unwrap();
    for (i, he) in m.halfedges().iter().enumerate() {
        if let Some(p) = he.pair {
            assert_eq!(m.pair(p), Some(HalfedgeId(i)));
        }
    }
    let unpaired: HashSet<HalfedgeId> = m.boundary_halfedges().into_iter().collect();
    let looped: HashSet<HalfedgeId> = m.boundary_loops().into_iter().flatten().collect();
    assert_eq!(unpaired, looped);
}

fn faces_point_outward(m: &Mesh) -> bool {
    (0..m.face_count()).all(|f| {
        let f = FaceId(f);
        m.face_normal(f).dot(&m.centroid(f)) > 0.0
    })
}

#[test]
fn octahedron_dual_has_cube_counts() {
    let oct = solid("4|2 3");
    assert_eq!(counts(&oct), (6, 12, 8));
    let d = dual(&oct).unwrap();
    assert_eq!(counts(&d), (8, 12, 6));
    assert!(d.is_closed());
    assert!(faces_point_outward(&d));
    assert_paired(&d);
    // Vertex i of the dual is the centroid of face i.
    for f in 0..oct.face_count() {
        let c = oct.centroid(FaceId(f));
        assert!((d.position(VertexId(f)) - c).norm() < 1e-12);
    }
}

#[test]
fn dual_is_a_topological_involution() {
    for m in [cube(), solid("5|2 3"), solid("3|2 5"), solid("2 3|4")] {
        let dd = dual(&dual(&m).unwrap()).unwrap();
        assert_eq!(counts(&dd), counts(&m));
        assert_paired(&dd);
    }
}

#[test]
fn dual_of_open_strip_closes_boundary_fans() {
    let d = dual(&strip()).unwrap();
    // Two centroids, six boundary midpoints, six vertex copies.
    assert_eq!(d.vertex_count(), 14);
    assert_eq!(d.face_count(), 6);
    assert_paired(&d);
}

#[test]
fn ambo_of_cube_is_cuboctahedron() {
    let a = ambo(&cube()).unwrap();
    assert_eq!(counts(&a), (12, 24, 14));
    assert_eq!(a.euler(), 2);
    assert!(faces_point_outward(&a));
    let roles = a.face_roles();
    assert_eq!(roles.iter().filter(|r| **r == Role::Existing).count(), 6);
    assert_eq!(roles.iter().filter(|r| **r == Role::New).count(), 8);
    for f in 0..a.face_count() {
        let f = FaceId(f);
        let want = if a.face(f).role == Role::Existing { 4 } else { 3 };
        assert_eq!(a.sides(f), want);
    }
    assert_paired(&a);
}

#[test]
fn ambo_of_open_strip() {
    let a = ambo(&strip()).unwrap();
    assert_eq!(a.vertex_count(), 13);
    assert_eq!(a.face_count(), 8);
    assert_paired(&a);
}

#[test]
fn kis_raises_selected_faces_only() {
    let k = kis(&cube(), 0.5, Selection::All).unwrap();
    assert_eq!(counts(&k), (14, 36, 24));
    assert!(faces_point_outward(&k));
    assert_paired(&k);
    // Apex of the +y face sits half a unit above it.
    let apexes: Vec<_> = (8..14).map(|i| k.position(VertexId(i))).collect();
    assert!(apexes.iter().any(|p| (p - Vector3::new(0.0, 1.5, 0.0)).norm() < 1e-12));

    let none = kis(&cube(), 0.5, Selection::Sides(3)).unwrap();
    assert_eq!(counts(&none), (8, 12, 6));
    assert!(none.face_roles().iter().all(|r| *r == Role::Ignored));

    let one = kis(&cube(), 0.0, Selection::OnlyFirst).unwrap();
    assert_eq!(counts(&one), (9, 16, 9));
    let roles = one.face_roles();
    assert_eq!(roles.iter().filter(|r| **r == Role::NewAlt).count(), 2);

    // Cuboctahedron with only its squares raised.
    let squares = kis(&ambo(&cube()).unwrap(), 0.2, Selection::NotSides(3)).unwrap();
    assert_eq!(counts(&squares), (18, 48, 32));
    assert_paired(&squares);
}

#[test]
fn gyro_of_cube_is_pentagonal_icositetrahedron() {
    let g = gyro(&cube(), 1.0 / 3.0, 0.0).unwrap();
    assert_eq!(counts(&g), (38, 60, 24));
    assert!((0..24).all(|f| g.sides(FaceId(f)) == 5));
    assert!(faces_point_outward(&g));
    assert_paired(&g);
}

#[test]
fn gyro_handles_open_input() {
    let g = gyro(&strip(), 1.0 / 3.0, 0.0).unwrap();
    assert_eq!(g.face_count(), 8);
    assert_paired(&g);
}

#[test]
fn truncate_cube() {
    let t = truncate(&cube(), 0.25, Selection::All).unwrap();
    assert_eq!(counts(&t), (24, 36, 14));
    assert!(faces_point_outward(&t));
    assert_paired(&t);

    // Cutting one corner adds a triangle.
    let one = truncate(&cube(), 0.25, Selection::OnlyFirst).unwrap();
    assert_eq!(counts(&one), (10, 15, 7));
    assert_eq!(one.euler(), 2);
    assert_paired(&one);
    let ignored = one.vertex_roles().iter().filter(|r| **r == Role::Ignored).count();
    assert_eq!(ignored, 7);
}

#[test]
fn truncate_open_strip_skips_boundary_faces() {
    let t = truncate(&strip(), 0.25, Selection::All).unwrap();
    assert_eq!(t.face_count(), 2);
    assert_paired(&t);
}

#[test]
fn chamfer_cube() {
    let c = chamfer(&cube(), 1.0 / 3.0).unwrap();
    assert_eq!(counts(&c), (32, 48, 18));
    assert_eq!(c.euler(), 2);
    assert_paired(&c);
    let hexagons = (0..c.face_count())
        .filter(|&f| c.sides(FaceId(f)) == 6)
        .count();
    assert_eq!(hexagons, 12);
    // Old corners slide inward until every hexagon is planar.
    assert!(c.position(VertexId(6)).norm() < 3f64.sqrt());
    for f in (0..c.face_count()).map(FaceId).filter(|&f| c.sides(f) == 6) {
        let p: Vec<_> = c.face_vertices(f).into_iter().map(|v| c.position(v)).collect();
        let n = (p[2] - p[1]).cross(&(p[4] - p[1])).normalize();
        assert!(p.iter().all(|q| (q - p[1]).dot(&n).abs() < 1e-9));
    }
}

#[test]
fn chamfer_open_strip_keeps_only_used_vertices() {
    // One interior edge: two inset quads and one hexagon between them.
    let c = chamfer(&strip(), 1.0 / 3.0).unwrap();
    assert_eq!(counts(&c), (10, 12, 3));
    assert_paired(&c);
    assert!((0..c.vertex_count()).all(|v| !c.vertex_halfedges(VertexId(v)).is_empty()));
}

#[test]
fn subdivide_cube() {
    let s = subdivide(&cube(), 0.0).unwrap();
    assert_eq!(counts(&s), (20, 48, 30));
    assert!(faces_point_outward(&s));
    assert_paired(&s);
}

#[test]
fn offset_moves_along_normals() {
    let o = offset(&cube(), 0.5).unwrap();
    assert_eq!(counts(&o), (8, 12, 6));
    for v in 0..8 {
        assert!((o.position(VertexId(v)).norm() - (3f64.sqrt() + 0.5)).abs() < 1e-12);
    }
    let w = offset_per_vertex(&cube(), &[1.0]).unwrap();
    assert!((w.position(VertexId(0)).norm() - (3f64.sqrt() + 1.0)).abs() < 1e-12);
    assert_eq!(w.position(VertexId(1)), cube().position(VertexId(1)));
}

#[test]
fn extrude_closes_open_sheets() {
    let x = extrude(&strip(), 0.2, false).unwrap();
    assert_eq!(counts(&x), (12, 20, 10));
    assert!(x.is_closed());
    assert_eq!(x.euler(), 2);
    assert_paired(&x);
    let sides = x.face_roles().iter().filter(|r| **r == Role::NewAlt).count();
    assert_eq!(sides, 6);

    let sym = extrude(&strip(), 0.2, true).unwrap();
    assert!((sym.position(VertexId(0)).z + 0.1).abs() < 1e-12);
    assert!((sym.position(VertexId(6)).z - 0.1).abs() < 1e-12);

    // A closed input gives two closed shells.
    let shells = extrude(&cube(), 0.1, false).unwrap();
    assert!(shells.is_closed());
    assert_eq!(shells.euler(), 4);
}

#[test]
fn ribbon_cube_leaves_holes_for_faces() {
    let r = ribbon(&cube(), 0.1, false, 0.0).unwrap();
    assert_eq!(counts(&r), (24, 48, 20));
    let loops = r.boundary_loops();
    assert_eq!(loops.len(), 6);
    assert!(loops.iter().all(|l| l.len() == 4));
    assert_paired(&r);
    // Corners sit inside their faces.
    assert!((0..24).all(|v| r.position(VertexId(v)).amax() < 1.0 + 1e-12));

    let smooth = ribbon(&cube(), 0.1, false, 0.2).unwrap();
    assert_eq!(smooth.vertex_count(), 24 + 12 * 4);
    assert_eq!(smooth.face_count(), 8 + 12 * 3);
    assert_paired(&smooth);
}

#[test]
fn ribbon_open_boundaries() {
    let closed_only = ribbon(&strip(), 0.1, false, 0.0).unwrap();
    assert_eq!(counts(&closed_only), (4, 4, 1));

    // Nothing interior, nothing left.
    let quad = Mesh::new(strip().to_face_lists().0, &[vec![0, 1, 4, 3]], &MeshCfg::default()).unwrap();
    assert_eq!(counts(&ribbon(&quad, 0.1, false, 0.0).unwrap()), (0, 0, 0));

    let r = ribbon(&strip(), 0.1, true, 0.0).unwrap();
    assert_eq!(r.vertex_count(), 8 + 12);
    assert_eq!(r.face_count(), 6 + 7);
    assert_paired(&r);
}

#[test]
fn selections_on_cube() {
    let m = cube();
    let up = Selection::FacingUp.faces(&m);
    assert_eq!(up, vec![false, false, false, true, false, false]);
    assert_eq!(Selection::FacingLevel.faces(&m).iter().filter(|x| **x).count(), 4);
    assert!(Selection::FacingOut.faces(&m).iter().all(|x| *x));
    assert!(Selection::FacingIn.faces(&m).iter().all(|x| !*x));
    assert!(Selection::Inner.faces(&m).iter().all(|x| *x));
    assert_eq!(Selection::Even.faces(&m), vec![true, false, true, false, true, false]);
    assert_eq!(Selection::Sides(3).vertices(&m), vec![true; 8]);
    assert_eq!(Selection::TopHalf.vertices(&m).iter().filter(|x| **x).count(), 4);

    let a = Selection::Random(7).faces(&m);
    assert_eq!(a, Selection::Random(7).faces(&m));

    let s = strip();
    assert_eq!(Selection::Outer.faces(&s), vec![true, true]);
    assert_eq!(Selection::Inner.vertices(&s), vec![false; 6]);
}

#[test]
fn selection_names_round_trip() {
    let all = [
        Selection::All,
        Selection::Sides(5),
        Selection::NotSides(3),
        Selection::EvenSided,
        Selection::OddSided,
        Selection::FacingUp,
        Selection::FacingDown,
        Selection::FacingLevel,
        Selection::FacingIn,
        Selection::FacingOut,
        Selection::TopHalf,
        Selection::Existing,
        Selection::New,
        Selection::NewAlt,
        Selection::AllNew,
        Selection::Ignored,
        Selection::Odd,
        Selection::Even,
        Selection::OnlyFirst,
        Selection::ExceptFirst,
        Selection::Inner,
        Selection::Outer,
        Selection::Random(42),
        Selection::None,
    ];
    for s in all {
        assert_eq!(s.to_string().parse::<Selection>().unwrap(), s);
    }
    assert!("sidesx".parse::<Selection>().is_err());
}

#[test]
fn chain_parsing() {
    let ops = parse_chain("k0.1@sides3, d ,a").unwrap();
    assert_eq!(
        ops,
        vec![
            Op::Kis {
                offset: 0.1,
                faces: Selection::Sides(3)
            },
            Op::Dual,
            Op::Ambo
        ]
    );
    assert_eq!(
        parse_chain("x0.2:1,r0.1:0:0.3").unwrap(),
        vec![
            Op::Extrude {
                distance: 0.2,
                symmetric: true
            },
            Op::Ribbon {
                offset: 0.1,
                boundaries: false,
                smooth: 0.3
            }
        ]
    );
    assert!(parse_chain("").unwrap().is_empty());
    assert_eq!(
        parse_chain("q").unwrap_err(),
        ChainError::UnknownOperator("q".into())
    );
    assert!(matches!(
        parse_chain("kx"),
        Err(ChainError::BadParameter { .. })
    ));
    assert!(matches!(
        parse_chain("d@all"),
        Err(ChainError::BadParameter { .. })
    ));
    assert!(matches!(
        parse_chain("d1"),
        Err(ChainError::BadParameter { .. })
    ));
    assert!(matches!(
        parse_chain("t0.2@bogus"),
        Err(ChainError::BadParameter { .. })
    ));
}

#[test]
fn compound_letters_parse() {
    assert_eq!(
        parse_chain("j,o,e0.2,b,m0.1,n,z,p0.05").unwrap(),
        vec![
            Op::Join,
            Op::Ortho,
            Op::Expand { ratio: 0.2 },
            Op::Bevel { ratio: 0.25 },
            Op::Meta { offset: 0.1 },
            Op::Needle,
            Op::Zip { ratio: 1.0 / 3.0 },
            Op::Offset { distance: 0.05 },
        ]
    );
    assert!(matches!(
        parse_chain("o0.1"),
        Err(ChainError::BadParameter { .. })
    ));
}

#[test]
fn compound_operators_on_cube() {
    let cube = cube();
    let cases: [(&str, (usize, usize, usize)); 7] = [
        ("j", (14, 24, 12)),
        ("o", (26, 48, 24)),
        ("e", (24, 48, 26)),
        ("b", (48, 72, 26)),
        ("m", (26, 72, 48)),
        ("n", (14, 36, 24)),
        ("z", (24, 36, 14)),
    ];
    for (letter, want) in cases {
        let m = apply_chain(&cube, &parse_chain(letter).unwrap()).unwrap();
        assert_eq!(counts(&m), want, "{letter}");
        assert!(m.is_closed(), "{letter}");
        assert!(faces_point_outward(&m), "{letter}");
        assert_paired(&m);
    }
}

#[test]
fn compound_operators_match_their_definitions() {
    let oct = solid("4|2 3");
    let same = |a: &str, b: &str| {
        let x = apply_chain(&oct, &parse_chain(a).unwrap()).unwrap();
        let y = apply_chain(&oct, &parse_chain(b).unwrap()).unwrap();
        assert_eq!(counts(&x), counts(&y), "{a} vs {b}");
    };
    same("j", "a,d");
    same("o", "j,j");
    same("e", "a,a");
    same("b", "a,t");
    same("m", "j,k");
    same("n", "t,d");
    same("z", "k,d");
}

#[test]
fn join_and_needle_close_open_edges_with_triangles() {
    let m = join(&strip()).unwrap();
    assert_eq!(counts(&m), (8, 14, 7));
    assert_paired(&m);
    let m = needle(&strip()).unwrap();
    assert_eq!(counts(&m), (8, 15, 8));
    assert_paired(&m);
}

#[test]
fn expand_bevel_zip_skip_open_vertices() {
    // No strip vertex is interior; only the shared edge grows a quad.
    let m = expand(&strip(), 0.25).unwrap();
    assert_eq!(counts(&m), (8, 10, 3));
    assert_paired(&m);
    let m = bevel(&strip(), 0.25).unwrap();
    assert_eq!(counts(&m), (16, 18, 3));
    assert_paired(&m);
    let m = zip(&strip(), 0.3).unwrap();
    assert_eq!(counts(&m), (8, 8, 2));
    assert_paired(&m);
}

#[test]
fn chain_applies_left_to_right() {
    let oct = solid("4|2 3");
    let m = apply_chain(&oct, &parse_chain("d,a").unwrap()).unwrap();
    // ambo(cube)
    assert_eq!(counts(&m), (12, 24, 14));
    let m = apply_chain(&oct, &[]).unwrap();
    assert_eq!(counts(&m), counts(&oct));
}

fn arb_compound() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Join),
        Just(Op::Ortho),
        (0.1f64..0.4).prop_map(|ratio| Op::Expand { ratio }),
        (0.1f64..0.4).prop_map(|ratio| Op::Bevel { ratio }),
        Just(Op::Meta { offset: 0.0 }),
        Just(Op::Needle),
        (0.1f64..0.5).prop_map(|ratio| Op::Zip { ratio }),
    ]
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        arb_compound(),
        Just(Op::Dual),
        Just(Op::Ambo),
        (0.0f64..0.3).prop_map(|offset| Op::Kis {
            offset,
            faces: Selection::All
        }),
        (0.2f64..0.45).prop_map(|ratio| Op::Gyro { ratio, offset: 0.0 }),
        (0.1f64..0.4, any::<u64>()).prop_map(|(amount, seed)| Op::Truncate {
            amount,
            vertices: Selection::Random(seed)
        }),
        (0.1f64..0.5).prop_map(|ratio| Op::Chamfer { ratio }),
        Just(Op::Subdivide { offset: 0.0 }),
        (-0.1f64..0.1).prop_map(|distance| Op::Offset { distance }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn random_chains_keep_pairing_consistent(ops in prop::collection::vec(arb_op(), 1..3)) {
        let m = apply_chain(&cube(), &ops).unwrap();
        assert_paired(&m);
        prop_assert!(m.is_closed());
        prop_assert_eq!(m.euler(), 2);
    }
}
