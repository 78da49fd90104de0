//! Raid type normalization
//!
//! Free-text raid type tokens pass through a fixed alias table to a canonical
//! name, which the service layer then tries to resolve to a guild emoji.
//! Unknown tokens pass through case-folded; raid type display is best-effort
//! and never blocks group creation.

/// Map a raw raid type token to its canonical name
pub fn canonical_raid_type(token: &str) -> String {
    let folded = token.trim().to_lowercase();
    match folded.as_str() {
        "5*" | "legendary" | "leg" => "legendary".to_string(),
        "rayquaza" | "ray" | "rayray" => "rayquaza".to_string(),
        _ => folded,
    }
}
