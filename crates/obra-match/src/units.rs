//! Unit-of-measure normalization.
//!
//! Collapses the spelling variants found in real catalogs (`m²`, `㎡`,
//! `m^2`, `MT2`, "metro cuadrado", ...) into a small closed vocabulary:
//! `m2` (area), `m3` (volume), `m` (linear), `kg` / `t` (mass), `h` / `dia`
//! (hour / workday), `u` (count), `gl` (lump sum).

use unicode_normalization::UnicodeNormalization;

/// Canonicalize a unit string. Idempotent and total: unrecognized units
/// come back in their flattened form, never as an error.
pub fn normalize_unit(raw: &str) -> String {
    let flat = flatten(raw);
    let canonical = match flat.as_str() {
        "m2" | "mt2" | "metrocuadrado" | "metroscuadrados" => "m2",
        "m3" | "mt3" | "metrocubico" | "metroscubicos" => "m3",
        "m" | "ml" | "mt" | "metro" | "metros" | "metrolineal" => "m",
        "kg" | "kgs" | "kilo" | "kilos" | "kilogramo" | "kilogramos" => "kg",
        "t" | "tn" | "ton" | "tonelada" | "toneladas" => "t",
        "h" | "hr" | "hrs" | "hora" | "horas" => "h",
        "dia" | "dias" | "jor" | "jornal" | "jornada" | "jornadas" => "dia",
        "u" | "ud" | "un" | "und" | "unid" | "unidad" | "unidades" | "pza" | "pieza"
        | "piezas" | "cu" => "u",
        "gl" | "glb" | "global" | "pa" | "partidaalzada" => "gl",
        _ => return flat,
    };
    canonical.to_string()
}

/// NFKD-fold and strip a unit down to lowercase alphanumerics. NFKD turns
/// `²`/`³`/`㎡`/`㎥` into plain digits, and dropping the rest handles `^2`
/// notation, slashes, and embedded whitespace in one pass.
fn flatten(raw: &str) -> String {
    raw.nfkd()
        .filter(char::is_ascii)
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
