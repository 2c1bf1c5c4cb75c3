use crate::map_instance::MapInstance;

/// provinces and territories of Canada, in the order used for assignments and reports
pub const REGIONS: [&str; 13] = [
    "BC", "AB", "SK", "MB", "ON", "QC", "NB", "NS", "PEI", "NL", "NU", "NT", "YT"
];

/// shared borders, as listed for each region
pub const ADJACENCY: [(&str, &[&str]); 13] = [
    ("BC",  &["AB", "YT", "NT"]),
    ("AB",  &["BC", "SK", "NT"]),
    ("SK",  &["AB", "MB", "NT"]),
    ("MB",  &["SK", "ON", "NU"]),
    ("ON",  &["MB", "QC"]),
    ("QC",  &["ON", "NB", "NL"]),
    ("NB",  &["QC", "NS", "PEI"]),
    ("NS",  &["NB", "PEI"]),
    ("PEI", &["NB", "NS"]),
    ("NL",  &["QC"]),
    ("NU",  &["MB", "NT"]),
    ("NT",  &["BC", "AB", "SK", "NU", "YT"]),
    ("YT",  &["NT", "BC"]),
];

/** builds the map of Canada */
pub fn canada_instance() -> MapInstance {
    MapInstance::from_named_adjacency(&ADJACENCY)
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::color::ColoringInstance;

    #[test]
    fn test_region_order() {
        let inst = canada_instance();
        assert_eq!(inst.nb_vertices(), 13);
        for (i,name) in REGIONS.iter().enumerate() {
            assert_eq!(inst.name(i), *name);
            assert_eq!(inst.vertex_id(name), Some(i));
        }
    }

    #[test]
    fn test_adjacency() {
        let inst = canada_instance();
        assert!(inst.is_symmetric());
        assert_eq!(inst.nb_adjacency_entries(), 34);
        assert_eq!(inst.edges().len(), 17);
        let nt = inst.vertex_id("NT").unwrap();
        assert_eq!(inst.degree(nt), 5);
        let nl = inst.vertex_id("NL").unwrap();
        assert_eq!(inst.neighbors(nl), &[inst.vertex_id("QC").unwrap()]);
        // every region borders at least one other
        assert!(inst.vertices().all(|u| inst.degree(u) > 0));
    }
}
