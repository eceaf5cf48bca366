use crate::catalog::{Dataset, PlanetRow, planet_details, planet_name};

pub fn format_cards(planets: &[PlanetRow], dataset: Dataset) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} exoplanetas encontrados\n", planets.len()));
    if planets.is_empty() {
        out.push_str("No se encontraron exoplanetas\n");
        return out;
    }
    for planet in planets {
        out.push('\n');
        out.push_str(&format_card(planet, dataset));
    }
    out
}

pub fn format_card(planet: &PlanetRow, dataset: Dataset) -> String {
    let mut out = format!("== {} ==\n", planet_name(planet, dataset));
    for detail in planet_details(planet) {
        match detail.unit {
            Some(unit) => out.push_str(&format!(
                "{}: {} {}\n",
                detail.label, detail.value, unit
            )),
            None => out.push_str(&format!("{}: {}\n", detail.label, detail.value)),
        }
    }
    out
}
