//! # Scan Data
//!
//! Descriptive records for scanned bodies: life, climate, age, rotation
//! and a generated species. Everything derives from one stream in a
//! fixed draw order, with a single override pass for the authored
//! designations after the name resolves.

use voidfield_core::{Mulberry32, Seed};

use crate::registry::site_at;

/// Name pool for emergent planets. Entry count feeds the index draw.
const PLANET_NAMES: [&str; 28] = [
    "Xylos", "Aelon", "Veridian", "Obsidian", "Celestia", "Aethel", "Solara",
    "Lunara", "Titanus", "Zephyr", "Astra", "Mo", "Orion", "Lyra",
    "Lilith", "Nebula", "Terra", "Yeawn", "Xavier", "Xia", "Caleb",
    "Sylus", "Zayne", "Rafayel", "Mao", "Calypso", "Aether", "Lumine",
];

/// Name pool for emergent moons.
const MOON_NAMES: [&str; 18] = [
    "Lune", "Paimon", "Mo", "Mao", "Tsuko", "Io", "Callisto",
    "Triton", "Elxi", "Oberon", "Hae", "Elxi", "Umbriel", "Xue",
    "Ariel", "Rhea", "Iapetus", "Daiso",
];

const CATEGORIES: [&str; 5] = ["Flora", "Fauna", "Fungi", "Microbial", "Sentient"];

/// Subcategory pools, indexed in lockstep with [`CATEGORIES`].
const SUBCATEGORIES: [&[&str]; 5] = [
    &[
        "Photosynthetic", "Chemosynthetic", "Carnivorous", "Arboreal", "Aquatic",
        "Crystalline", "Bioluminescent", "Parasitic", "Symbiotic", "Epiphytic",
    ],
    &[
        "Mammalian", "Reptilian", "Avian", "Insectoid", "Aquatic",
        "Amphibious", "Arachnid", "Cephalopod", "Exoskeletal", "Endoskeletal",
        "Flying", "Burrowing", "Gliding", "Bioluminescent",
    ],
    &[
        "Mycorrhizal", "Saprophytic", "Parasitic", "Symbiotic", "Bioluminescent",
        "Carnivorous", "Spore-based", "Hyphal", "Yeast-based",
    ],
    &[
        "Bacterial", "Viral", "Archaeal", "Protist", "Nanobiotic",
        "Plasmid-based", "Extremophilic", "Photosynthetic", "Chemosynthetic",
    ],
    &[
        "Bipedal", "Quadrupedal", "Avianoid", "Aquatic-Intelligent", "Arboreal",
        "Subterranean", "Aerial", "Hive-mind", "Telepathic", "Technological",
    ],
];

const DESCRIPTORS: [&str; 40] = [
    "Bio-luminescent", "Cryo-tolerant", "Hydrophilic", "Xenomorphic", "Symbiotic",
    "Silicate-based", "Carbon-based", "Silicon-based", "Metallic", "Crystalline",
    "Photosynthetic", "Chemosynthetic", "Radiotrophic", "Thermophilic", "Psychrophilic",
    "Acidophilic", "Alkaliphilic", "Halophilic", "Barophilic", "Electrogenic",
    "Magnetic", "Gaseous", "Plasmic", "Chitinous", "Exo-skeletal",
    "Endo-skeletal", "Amorphous", "Modular", "Colonial", "Hive-minded",
    "Telepathic", "Psionic", "Energy-based", "Phase-shifting", "Dimensional",
    "Quantum-entangled", "Time-perceptive", "Gravity-resistant", "Anti-matter", "Dark-matter",
];

const PREFIXES: [&str; 48] = [
    "Alpha", "Beta", "Gamma", "Delta", "Epsilon", "Zeta", "Eta", "Theta",
    "Iota", "Kappa", "Lambda", "Mu", "Nu", "Xi", "Omicron", "Pi", "Rho",
    "Sigma", "Tau", "Upsilon", "Phi", "Chi", "Psi", "Omega", "Nova", "Quasar",
    "Pulsar", "Nebula", "Galaxy", "Cosmo", "Astro", "Stellar", "Lunar", "Solar",
    "Void", "Ether", "Aether", "Quantum", "Chrono", "Hyper", "Ultra", "Mega",
    "Giga", "Tera", "Peta", "Exa", "Zetta", "Yotta",
];

const SUFFIXES: [&str; 40] = [
    "phage", "vore", "morph", "pod", "nid", "form", "oid", "ite", "ling",
    "spore", "cell", "zyme", "plasm", "cyte", "phyll", "root", "stem",
    "leaf", "flower", "spike", "scale", "shell", "wing", "eye", "mouth",
    "limb", "tentacle", "flagella", "cillia", "spine", "fang", "claw",
    "talon", "hoof", "paw", "fin", "gill", "antenna", "sensor", "node",
];

/// The one authored species in the universe.
const MAO_SPECIES: &str = "Aesthetiflora (6th Dimensional Being)";

/// The descriptive record a completed scan yields.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanRecord {
    /// Resolved body name.
    pub name: String,
    /// Whether the body hosts life.
    pub has_life: bool,
    /// Population; zero without life.
    pub population: u64,
    /// Mean surface temperature, degrees Celsius.
    pub temperature_c: i64,
    /// Age in billions of years.
    pub age_billion_years: f64,
    /// Rotation period, hours.
    pub day_length_hours: f64,
    /// Orbital period, days.
    pub year_length_days: f64,
    /// Generated species; `None` without life.
    pub species: Option<String>,
}

/// Generates the scan record for a body.
///
/// `hint` carries an identity override: a designation to use verbatim,
/// or a `coord-X-Y` marker resolved against the special-site registry
/// (non-site coordinates fall through to pool naming).
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn scan_body(seed: Seed, is_moon: bool, hint: Option<&str>) -> ScanRecord {
    let mut stream = Mulberry32::new(seed);

    let mut has_life = stream.next() > 0.65;
    let mut population: u64 = if has_life {
        (stream.next() * 10_000_000_000.0).floor() as u64
    } else {
        0
    };

    let mut temp_base = -100.0 + stream.next() * 200.0;
    if is_moon {
        // Moons swing wider around their base climate.
        temp_base += (stream.next() - 0.5) * 50.0;
    }
    let temp_variation = stream.next() * 50.0 - 25.0;

    let age_billion_years = stream.next() * 10.0 + 1.0;
    let day_length_hours = stream.next() * 100.0 + 5.0;
    let year_length_days = stream.next() * 1000.0 + 50.0;

    let name = resolve_name(&mut stream, is_moon, hint);

    // Authored override pass. Base fields are drawn unconditionally
    // above; the overrides rewrite them once the name is known, and
    // temperature settles afterwards.
    if name.eq_ignore_ascii_case("mao") {
        has_life = true;
        if population == 0 {
            population = (stream.next() * 5_000_000_000.0).floor() as u64 + 100_000_000;
        }
        temp_base = 15.0 + stream.next() * 10.0;
    }
    if name.eq_ignore_ascii_case("mo") {
        has_life = stream.next() > 0.3;
        if has_life && population == 0 {
            population = (stream.next() * 3_000_000_000.0).floor() as u64 + 50_000_000;
        }
        temp_base = -20.0 + stream.next() * 40.0;
    }

    let temperature_c = round_half_up(temp_base + temp_variation);
    let species = if has_life {
        Some(species_name(&mut stream, &name))
    } else {
        None
    };

    ScanRecord {
        name,
        has_life,
        population,
        temperature_c,
        age_billion_years,
        day_length_hours,
        year_length_days,
        species,
    }
}

/// Resolves the body name: hint verbatim, coordinate marker through the
/// registry, or two pool draws (index, then disambiguator).
fn resolve_name(stream: &mut Mulberry32, is_moon: bool, hint: Option<&str>) -> String {
    match hint {
        Some(h) => match h.strip_prefix("coord-") {
            Some(rest) => match parse_coord_marker(rest) {
                Some(site_name) => site_name.to_string(),
                None => pool_name(stream, is_moon),
            },
            None => h.to_string(),
        },
        None => pool_name(stream, is_moon),
    }
}

fn parse_coord_marker(rest: &str) -> Option<&'static str> {
    let (x, y) = rest.split_once('-')?;
    let x: i64 = x.parse().ok()?;
    let y: i64 = y.parse().ok()?;
    site_at(x, y).map(|site| site.name)
}

#[allow(clippy::cast_possible_truncation)]
fn pool_name(stream: &mut Mulberry32, is_moon: bool) -> String {
    if is_moon {
        let base = MOON_NAMES[stream.in_range(0, MOON_NAMES.len() as u32) as usize];
        format!("{base}-{}", stream.in_range(0, 9))
    } else {
        let base = PLANET_NAMES[stream.in_range(0, PLANET_NAMES.len() as u32) as usize];
        format!("{base}-{}", stream.in_range(0, 999))
    }
}

/// Builds a species name from the word tables. 30% of draws take the
/// longer prefixed template; all five component draws happen either way.
#[allow(clippy::cast_possible_truncation)]
fn species_name(stream: &mut Mulberry32, body_name: &str) -> String {
    if body_name.eq_ignore_ascii_case("mao") {
        return MAO_SPECIES.to_string();
    }

    let category_index = stream.in_range(0, CATEGORIES.len() as u32) as usize;
    let category = CATEGORIES[category_index];
    let subs = SUBCATEGORIES[category_index];
    let sub = subs[stream.in_range(0, subs.len() as u32) as usize];
    let descriptor = DESCRIPTORS[stream.in_range(0, DESCRIPTORS.len() as u32) as usize];
    let prefix = PREFIXES[stream.in_range(0, PREFIXES.len() as u32) as usize];
    let suffix = SUFFIXES[stream.in_range(0, SUFFIXES.len() as u32) as usize];

    if stream.next() > 0.7 {
        format!("{prefix}-{sub} {descriptor} {suffix}")
    } else {
        format!("{descriptor} {sub} {category}")
    }
}

/// `round half up` toward positive infinity, matching the convention
/// the rest of the pipeline uses for display values.
#[allow(clippy::cast_possible_truncation)]
fn round_half_up(v: f64) -> i64 {
    (v + 0.5).floor() as i64
}
