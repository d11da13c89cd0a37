/// Derived carbon/mass values are rounded to this many decimal places before
/// being exposed or persisted, so totals stay stable across recomputation.
pub const CARBON_DECIMALS: i32 = 3;

/// Default half-height of the contribution bars, in report units. One shared
/// height scale covers both bars so magnitudes stay comparable.
pub const DEFAULT_HALF_HEIGHT: f64 = 120.0;

/// Built-in NRM element hierarchy used when no `--taxonomy` file is given.
/// Labels carry their dotted numeric code as a leading prefix; an empty map
/// marks a leaf.
pub const DEFAULT_TAXONOMY_JSON: &str = r#"{
  "0 Facilitating works": {
    "0.1 Toxic and hazardous material treatment": {},
    "0.2 Major demolition works": {}
  },
  "1 Substructure": {
    "1.1 Substructure": {}
  },
  "2 Superstructure": {
    "2.1 Frame": {},
    "2.2 Upper floors": {},
    "2.3 Roof": {},
    "2.4 Stairs and ramps": {},
    "2.5 External walls": {
      "2.5.1 External enclosing walls above ground level": {},
      "2.5.2 External enclosing walls below ground level": {}
    },
    "2.6 Windows and external doors": {},
    "2.7 Internal walls and partitions": {},
    "2.8 Internal doors": {}
  },
  "3 Internal finishes": {
    "3.1 Wall finishes": {},
    "3.2 Floor finishes": {},
    "3.3 Ceiling finishes": {}
  },
  "4 Fittings, furnishings and equipment": {},
  "5 Services": {
    "5.1 Sanitary installations": {},
    "5.8 Ventilation": {},
    "5.13 Lift and conveyor installations": {}
  },
  "8 External works": {
    "8.1 Site preparation works": {},
    "8.2 Roads, paths, pavings and surfacings": {}
  }
}"#;
