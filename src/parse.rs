//! Free-text room description parsing.
//!
//! Extracts dimensions, occupancy, window and equipment facts from one or
//! two sentences of Spanish or English ("oficina de 4x5x2.7 con 4 personas
//! y 2 ventanas al oeste") and synthesizes a [`RoomAnalysis`] the
//! calculator can consume. Fragments from follow-up messages can be merged
//! into an existing analysis.

use serde::{Deserialize, Serialize};

use crate::inputs::EquipmentKind;
use crate::room::{
    CeilingType, Orientation, RoomAnalysis, RoomDimensions, RoomShape, RoomType, WindowAnalysis,
};

/// Facts recovered from a piece of text. Absent fields were not mentioned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedRoomInfo {
    pub width: Option<f64>,
    pub length: Option<f64>,
    pub height: Option<f64>,
    pub area: Option<f64>,
    pub room_type: Option<RoomType>,
    pub occupants: Option<u32>,
    pub window_count: Option<u32>,
    pub window_orientation: Option<Orientation>,
    pub has_solar_film: Option<bool>,
    pub equipment: Vec<EquipmentKind>,
    pub has_direct_sunlight: Option<bool>,
}

/// Parse room facts out of free text.
pub fn parse_room_text(text: &str) -> ParsedRoomInfo {
    let normalized = normalize(text);
    let chars: Vec<char> = normalized.chars().collect();
    let mut parsed = ParsedRoomInfo::default();

    if let Some((width, length, height)) = parse_dimensions(&chars) {
        parsed.width = Some(width);
        parsed.length = Some(length);
        parsed.height = height;
        parsed.area = Some(width * length);
    } else if let Some(area) = parse_area(&chars) {
        parsed.area = Some(area);
    }
    if parsed.height.is_none() {
        parsed.height = parse_keyword_number(&chars, &["altura", "alto", "height", "ceiling"]);
    }

    parsed.room_type = parse_room_type(&normalized);
    parsed.occupants = parse_count_before(
        &chars,
        &["persona", "people", "ocupante", "occupant", "trabajador", "employee"],
    );

    if contains_any(
        &normalized,
        &[
            "sin ventanas",
            "sin ventana",
            "no windows",
            "no tiene ventanas",
            "no tienen ventanas",
            "ninguna ventana",
        ],
    ) {
        parsed.window_count = Some(0);
    } else {
        parsed.window_count = parse_count_before(&chars, &["ventana", "window"]);
    }

    let mentions_windows =
        parsed.window_count.is_some() || contains_stem(&normalized, "ventana").is_some()
            || contains_stem(&normalized, "window").is_some()
            || contains_any(&normalized, &["facing", "orientad", "hacia el", "al "]);
    if mentions_windows {
        parsed.window_orientation = parse_orientation(&normalized);
    }

    // Negative phrasing first: "sin pelicula solar" also contains the
    // positive phrase.
    if contains_any(
        &normalized,
        &[
            "sin pelicula solar",
            "sin filtro solar",
            "no solar film",
            "vidrio normal",
            "vidrio transparente",
            "clear glass",
        ],
    ) {
        parsed.has_solar_film = Some(false);
    } else if contains_any(
        &normalized,
        &[
            "pelicula solar",
            "filtro solar",
            "vidrio tintado",
            "vidrio polarizado",
            "solar film",
            "tinted",
        ],
    ) {
        parsed.has_solar_film = Some(true);
    }

    if contains_any(
        &normalized,
        &["sin sol directo", "no le da el sol", "no da el sol", "sombra", "no direct sun", "shaded"],
    ) {
        parsed.has_direct_sunlight = Some(false);
    } else if contains_any(
        &normalized,
        &["sol directo", "luz directa", "direct sun", "mucho sol"],
    ) {
        parsed.has_direct_sunlight = Some(true);
    }

    parsed.equipment = parse_equipment(&chars, &normalized);
    parsed
}

/// Build a complete analysis from parsed facts, filling gaps with the
/// conservative defaults the conversational flow uses before follow-up
/// questions are answered.
pub fn synthesize_analysis(parsed: &ParsedRoomInfo) -> RoomAnalysis {
    let area = parsed
        .area
        .or_else(|| Some(parsed.width? * parsed.length?))
        .unwrap_or(20.0);
    let side = area.sqrt();
    let width = round1(parsed.width.unwrap_or(side));
    let length = round1(parsed.length.unwrap_or(side));
    let height = round1(parsed.height.unwrap_or(2.7));

    let room_type = parsed.room_type.unwrap_or(if area <= 15.0 {
        RoomType::ResidentialBedroom
    } else if area <= 30.0 {
        RoomType::Office
    } else {
        RoomType::Other
    });

    // One window is the conservative default when none were mentioned.
    let window_count = parsed.window_count.unwrap_or(1);

    RoomAnalysis {
        dimensions: RoomDimensions {
            width,
            length,
            height,
            area: round1(area),
            volume: round1(width * length * height),
        },
        windows: WindowAnalysis {
            count: window_count,
            orientation: parsed.window_orientation.unwrap_or(Orientation::Unknown),
            has_solar_film: parsed.has_solar_film.unwrap_or(false),
            approximate_area: Some(window_count as f64 * 2.0),
        },
        room_type,
        ceiling_type: if height > 3.5 {
            CeilingType::High
        } else {
            CeilingType::Standard
        },
        has_direct_sunlight: parsed.has_direct_sunlight.unwrap_or(false),
        room_shape: RoomShape::Rectangular,
        estimated_occupancy: parsed.occupants.unwrap_or(0),
        detected_equipment: parsed.equipment.clone(),
        // Text descriptions rank below image analysis.
        confidence_score: 0.6,
    }
}

/// Fold follow-up facts into an existing analysis, keeping everything the
/// new text does not mention.
pub fn merge_analysis(analysis: &RoomAnalysis, parsed: &ParsedRoomInfo) -> RoomAnalysis {
    let mut updated = analysis.clone();

    if let Some(occupants) = parsed.occupants {
        updated.estimated_occupancy = occupants;
    }
    if let Some(count) = parsed.window_count {
        updated.windows.count = count;
        updated.windows.approximate_area = Some(count as f64 * 2.0);
    }
    if let Some(orientation) = parsed.window_orientation {
        updated.windows.orientation = orientation;
    }
    if let Some(film) = parsed.has_solar_film {
        updated.windows.has_solar_film = film;
    }
    if let Some(sun) = parsed.has_direct_sunlight {
        updated.has_direct_sunlight = sun;
    }
    if let Some(room_type) = parsed.room_type {
        updated.room_type = room_type;
    }
    for &kind in &parsed.equipment {
        if !updated.detected_equipment.contains(&kind) {
            updated.detected_equipment.push(kind);
        }
    }
    updated
}

fn normalize(text: &str) -> String {
    text.to_lowercase()
        .replace('×', "x")
        .replace('²', "2")
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
}

/// Parse a decimal number starting exactly at `i` ("4", "2.7", "4,5").
/// Returns the value and the index one past its end.
fn number_at(chars: &[char], i: usize) -> Option<(f64, usize)> {
    if i > 0 && (chars[i - 1].is_ascii_digit() || chars[i - 1] == '.' || chars[i - 1] == ',') {
        return None; // mid-number
    }
    let mut j = i;
    while j < chars.len() && chars[j].is_ascii_digit() {
        j += 1;
    }
    if j == i {
        return None;
    }
    let mut text: String = chars[i..j].iter().collect();
    if j < chars.len() && (chars[j] == '.' || chars[j] == ',') {
        let mut k = j + 1;
        while k < chars.len() && chars[k].is_ascii_digit() {
            k += 1;
        }
        if k > j + 1 {
            text.push('.');
            text.extend(&chars[j + 1..k]);
            j = k;
        }
    }
    text.parse().ok().map(|value| (value, j))
}

fn skip_spaces(chars: &[char], mut i: usize) -> usize {
    while i < chars.len() && chars[i] == ' ' {
        i += 1;
    }
    i
}

/// "4x5" or "4x5x2.7", with optional spaces around the separators.
fn parse_dimensions(chars: &[char]) -> Option<(f64, f64, Option<f64>)> {
    for start in 0..chars.len() {
        let Some((width, i)) = number_at(chars, start) else {
            continue;
        };
        let i = skip_spaces(chars, i);
        if chars.get(i) != Some(&'x') {
            continue;
        }
        let i = skip_spaces(chars, i + 1);
        let Some((length, i)) = number_at(chars, i) else {
            continue;
        };
        let j = skip_spaces(chars, i);
        if chars.get(j) == Some(&'x') {
            let k = skip_spaces(chars, j + 1);
            if let Some((height, _)) = number_at(chars, k) {
                return Some((width, length, Some(height)));
            }
        }
        return Some((width, length, None));
    }
    None
}

/// "20m2", "20 m2", "20 metros cuadrados", "20 square meters".
fn parse_area(chars: &[char]) -> Option<f64> {
    for start in 0..chars.len() {
        let Some((value, i)) = number_at(chars, start) else {
            continue;
        };
        let rest: String = chars[skip_spaces(chars, i)..].iter().collect();
        if rest.starts_with("m2")
            || rest.starts_with("metros cuadrados")
            || rest.starts_with("metro cuadrado")
            || rest.starts_with("square meter")
            || rest.starts_with("sqm")
        {
            return Some(value);
        }
    }
    None
}

/// First number within reach after any of the keywords
/// ("altura de 3.5m" → 3.5).
fn parse_keyword_number(chars: &[char], keywords: &[&str]) -> Option<f64> {
    let text: String = chars.iter().collect();
    for &keyword in keywords {
        let Some(pos) = contains_stem(&text, keyword) else {
            continue;
        };
        let start = pos + keyword.chars().count();
        let window_end = (start + 16).min(chars.len());
        for i in start..window_end {
            if let Some((value, _)) = number_at(chars, i) {
                return Some(value);
            }
        }
    }
    None
}

/// A count directly before one of the stems ("4 personas" → 4,
/// "2 ventanas" → 2). The bare stem without a count yields nothing.
fn parse_count_before(chars: &[char], stems: &[&str]) -> Option<u32> {
    for start in 0..chars.len() {
        let Some((value, i)) = number_at(chars, start) else {
            continue;
        };
        let i = skip_spaces(chars, i);
        let word: String = chars[i..]
            .iter()
            .take_while(|c| c.is_alphabetic())
            .collect();
        if stems.iter().any(|stem| word.starts_with(stem)) {
            return Some(value as u32);
        }
    }
    None
}

fn parse_orientation(text: &str) -> Option<Orientation> {
    for (stem, orientation) in [
        ("norte", Orientation::North),
        ("north", Orientation::North),
        ("sur", Orientation::South),
        ("south", Orientation::South),
        ("este", Orientation::East),
        ("east", Orientation::East),
        ("oeste", Orientation::West),
        ("west", Orientation::West),
    ] {
        if contains_stem(text, stem).is_some() {
            return Some(orientation);
        }
    }
    None
}

fn parse_room_type(text: &str) -> Option<RoomType> {
    // First match wins; compound phrases come before their prefixes
    // ("sala de juntas" before "sala").
    let patterns: [(&[&str], RoomType); 10] = [
        (&["oficina", "office", "despacho"], RoomType::Office),
        (
            &["sala de juntas", "conference", "reunion", "meeting"],
            RoomType::Conference,
        ),
        (
            &["servidor", "server", "datacenter", "data center"],
            RoomType::ServerRoom,
        ),
        (
            &["dormitorio", "bedroom", "recamara", "habitacion", "cuarto"],
            RoomType::ResidentialBedroom,
        ),
        (
            &["sala", "living", "estancia", "comedor"],
            RoomType::ResidentialLiving,
        ),
        (&["restaurante", "restaurant"], RoomType::Restaurant),
        (
            &["tienda", "retail", "comercio", "local comercial", "shop", "store"],
            RoomType::Retail,
        ),
        (&["bodega", "warehouse", "almacen"], RoomType::Warehouse),
        (&["gimnasio", "gym"], RoomType::Gym),
        (
            &["salon de clases", "classroom", "aula", "escuela"],
            RoomType::Classroom,
        ),
    ];
    for (stems, room_type) in patterns {
        if stems.iter().any(|&stem| contains_stem(text, stem).is_some()) {
            return Some(room_type);
        }
    }
    None
}

fn parse_equipment(chars: &[char], text: &str) -> Vec<EquipmentKind> {
    let mut equipment = Vec::new();
    for (stems, kind) in [
        (
            &["computadora", "computer", "laptop", "portatil", "pc"][..],
            EquipmentKind::Computer,
        ),
        (&["servidor", "server", "rack"][..], EquipmentKind::Server),
        (&["impresora", "printer"][..], EquipmentKind::Printer),
        (
            &["cocina", "estufa", "horno", "microondas", "kitchen", "stove", "oven", "microwave"][..],
            EquipmentKind::KitchenSmall,
        ),
    ] {
        let mentioned = stems.iter().any(|&stem| contains_stem(text, stem).is_some());
        if !mentioned {
            continue;
        }
        let count = parse_count_before(chars, stems).unwrap_or(1);
        for _ in 0..count.min(99) {
            equipment.push(kind);
        }
    }
    equipment
}

/// Position of `stem` starting at a word boundary, if present.
fn contains_stem(text: &str, stem: &str) -> Option<usize> {
    let chars: Vec<char> = text.chars().collect();
    let stem_chars: Vec<char> = stem.chars().collect();
    if stem_chars.is_empty() || stem_chars.len() > chars.len() {
        return None;
    }
    for i in 0..=chars.len() - stem_chars.len() {
        if chars[i..i + stem_chars.len()] != stem_chars[..] {
            continue;
        }
        if i > 0 && is_word_char(chars[i - 1]) {
            continue;
        }
        return Some(i);
    }
    None
}

fn contains_any(text: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|phrase| text.contains(phrase))
}
