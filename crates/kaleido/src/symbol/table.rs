//! The tabulated uniform polyhedra, addressed as `#1` through `#80`.
//!
//! Entries are `(wythoff symbol, name, dual name)`. The order is fixed; callers
//! persist indices, so new entries may only be appended.

/// One tabulated uniform polyhedron.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UniformEntry {
    pub index: usize,
    pub symbol: &'static str,
    pub name: &'static str,
    pub dual: &'static str,
}

/// Number of tabulated polyhedra.
pub const UNIFORM_COUNT: usize = 80;

/// Index of the single polyhedron without a Wythoff bar.
pub const DIRHOMBIC_INDEX: usize = 80;

const UNIFORM: [(&str, &str, &str); UNIFORM_COUNT] = [
    ("2 5|2", "pentagonal prism", "pentagonal dipyramid"),
    ("|2 2 5", "pentagonal antiprism", "pentagonal deltohedron"),
    ("2 5/2|2", "pentagrammic prism", "pentagrammic dipyramid"),
    ("|2 2 5/2", "pentagrammic antiprism", "pentagrammic deltohedron"),
    ("|2 2 5/3", "pentagrammic crossed antiprism", "pentagrammic concave deltohedron"),
    ("3|2 3", "tetrahedron", "tetrahedron"),
    ("2 3|3", "truncated tetrahedron", "triakistetrahedron"),
    ("3/2 3|3", "octahemioctahedron", "octahemioctacron"),
    ("3/2 3|2", "tetrahemihexahedron", "tetrahemihexacron"),
    ("4|2 3", "octahedron", "cube"),
    ("3|2 4", "cube", "octahedron"),
    ("2|3 4", "cuboctahedron", "rhombic dodecahedron"),
    ("2 4|3", "truncated octahedron", "tetrakishexahedron"),
    ("2 3|4", "truncated cube", "triakisoctahedron"),
    ("3 4|2", "rhombicuboctahedron", "deltoidal icositetrahedron"),
    ("2 3 4|", "truncated cuboctahedron", "disdyakisdodecahedron"),
    ("|2 3 4", "snub cube", "pentagonal icositetrahedron"),
    ("3/2 4|4", "small cubicuboctahedron", "small hexacronic icositetrahedron"),
    ("3 4|4/3", "great cubicuboctahedron", "great hexacronic icositetrahedron"),
    ("4/3 4|3", "cubohemioctahedron", "hexahemioctacron"),
    ("4/3 3 4|", "cubitruncated cuboctahedron", "tetradyakishexahedron"),
    ("3/2 4|2", "great rhombicuboctahedron", "great deltoidal icositetrahedron"),
    ("3/2 2 4|", "small rhombihexahedron", "small rhombihexacron"),
    ("2 3|4/3", "stellated truncated hexahedron", "great triakisoctahedron"),
    ("4/3 2 3|", "great truncated cuboctahedron", "great disdyakisdodecahedron"),
    ("4/3 3/2 2|", "great rhombihexahedron", "great rhombihexacron"),
    ("5|2 3", "icosahedron", "dodecahedron"),
    ("3|2 5", "dodecahedron", "icosahedron"),
    ("2|3 5", "icosidodecahedron", "rhombic triacontahedron"),
    ("2 5|3", "truncated icosahedron", "pentakisdodecahedron"),
    ("2 3|5", "truncated dodecahedron", "triakisicosahedron"),
    ("3 5|2", "rhombicosidodecahedron", "deltoidal hexecontahedron"),
    ("2 3 5|", "truncated icosidodecahedron", "disdyakistriacontahedron"),
    ("|2 3 5", "snub dodecahedron", "pentagonal hexecontahedron"),
    ("3|5/2 3", "small ditrigonal icosidodecahedron", "small triambic icosahedron"),
    ("5/2 3|3", "small icosicosidodecahedron", "small icosacronic hexecontahedron"),
    ("|5/2 3 3", "small snub icosicosidodecahedron", "small hexagonal hexecontahedron"),
    ("3/2 5|5", "small dodecicosidodecahedron", "small dodecacronic hexecontahedron"),
    ("5|2 5/2", "small stellated dodecahedron", "great dodecahedron"),
    ("5/2|2 5", "great dodecahedron", "small stellated dodecahedron"),
    ("2|5/2 5", "great dodecadodecahedron", "medial rhombic triacontahedron"),
    ("2 5/2|5", "truncated great dodecahedron", "small stellapentakisdodecahedron"),
    ("5/2 5|2", "rhombidodecadodecahedron", "medial deltoidal hexecontahedron"),
    ("2 5/2 5|", "small rhombidodecahedron", "small rhombidodecacron"),
    ("|2 5/2 5", "snub dodecadodecahedron", "medial pentagonal hexecontahedron"),
    ("3|5/3 5", "ditrigonal dodecadodecahedron", "medial triambic icosahedron"),
    ("3 5|5/3", "great ditrigonal dodecicosidodecahedron", "great ditrigonal dodecacronic hexecontahedron"),
    ("5/3 3|5", "small ditrigonal dodecicosidodecahedron", "small ditrigonal dodecacronic hexecontahedron"),
    ("5/3 5|3", "icosidodecadodecahedron", "medial icosacronic hexecontahedron"),
    ("5/3 3 5|", "icositruncated dodecadodecahedron", "tridyakisicosahedron"),
    ("|5/3 3 5", "snub icosidodecadodecahedron", "medial hexagonal hexecontahedron"),
    ("3/2|3 5", "great ditrigonal icosidodecahedron", "great triambic icosahedron"),
    ("3/2 5|3", "great icosicosidodecahedron", "great icosacronic hexecontahedron"),
    ("3/2 3|5", "small icosihemidodecahedron", "small icosihemidodecacron"),
    ("3/2 3 5|", "small dodecicosahedron", "small dodecicosacron"),
    ("5/4 5|5", "small dodecahemidodecahedron", "small dodecahemidodecacron"),
    ("3|2 5/2", "great stellated dodecahedron", "great icosahedron"),
    ("5/2|2 3", "great icosahedron", "great stellated dodecahedron"),
    ("2|5/2 3", "great icosidodecahedron", "great rhombic triacontahedron"),
    ("2 5/2|3", "great truncated icosahedron", "great stellapentakisdodecahedron"),
    ("2 5/2 3|", "rhombicosahedron", "rhombicosacron"),
    ("|2 5/2 3", "great snub icosidodecahedron", "great pentagonal hexecontahedron"),
    ("2 5|5/3", "small stellated truncated dodecahedron", "great pentakisdodekahedron"),
    ("5/3 2 5|", "truncated dodecadodecahedron", "medial disdyakistriacontahedron"),
    ("|5/3 2 5", "inverted snub dodecadodecahedron", "medial inverted pentagonal hexecontahedron"),
    ("5/2 3|5/3", "great dodecicosidodecahedron", "great dodecacronic hexecontahedron"),
    ("5/3 5/2|3", "small dodecahemicosahedron", "small dodecahemicosacron"),
    ("5/3 5/2 3|", "great dodecicosahedron", "great dodecicosacron"),
    ("|5/3 5/2 3", "great snub dodecicosidodecahedron", "great hexagonal hexecontahedron"),
    ("5/4 5|3", "great dodecahemicosahedron", "great dodecahemicosacron"),
    ("2 3|5/3", "great stellated truncated dodecahedron", "great triakisicosahedron"),
    ("5/3 3|2", "great rhombicosidodecahedron", "great deltoidal hexecontahedron"),
    ("5/3 2 3|", "great truncated icosidodecahedron", "great disdyakistriacontahedron"),
    ("|5/3 2 3", "great inverted snub icosidodecahedron", "great inverted pentagonal hexecontahedron"),
    ("5/3 5/2|5/3", "great dodecahemidodecahedron", "great dodecahemidodecacron"),
    ("3/2 3|5/3", "great icosihemidodecahedron", "great icosihemidodecacron"),
    ("|3/2 3/2 5/2", "small retrosnub icosicosidodecahedron", "small hexagrammic hexecontahedron"),
    ("3/2 5/3 2|", "great rhombidodecahedron", "great rhombidodecacron"),
    ("|3/2 5/3 2", "great retrosnub icosidodecahedron", "great pentagrammic hexecontahedron"),
    ("3/2 5/3 3 5/2", "great dirhombicosidodecahedron", "great dirhombicosidodecacron"),
];

/// Tabulated entry for a 1-based index.
pub fn lookup(index: usize) -> Option<UniformEntry> {
    if index == 0 || index > UNIFORM_COUNT {
        return None;
    }
    let (symbol, name, dual) = UNIFORM[index - 1];
    Some(UniformEntry {
        index,
        symbol,
        name,
        dual,
    })
}

/// All entries in index order.
pub fn entries() -> impl Iterator<Item = UniformEntry> {
    (1..=UNIFORM_COUNT).filter_map(lookup)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_one_based_and_bounded() {
        assert!(lookup(0).is_none());
        assert!(lookup(UNIFORM_COUNT + 1).is_none());
        let e = lookup(27).unwrap();
        assert_eq!(e.symbol, "5|2 3");
        assert_eq!(e.name, "icosahedron");
        assert_eq!(entries().count(), UNIFORM_COUNT);
        assert!(!lookup(DIRHOMBIC_INDEX).unwrap().symbol.contains('|'));
    }
}
