use std::fs;
use std::path::Path;

use log::debug;

use crate::error::Result;
use crate::models::MenuItem;

/// Load menu items from a JSON snapshot.
///
/// The list is returned as stored; partitioning and ordering are the
/// planner's concern.
pub fn load_menu<P: AsRef<Path>>(path: P) -> Result<Vec<MenuItem>> {
    let content = fs::read_to_string(path)?;
    let items: Vec<MenuItem> = serde_json::from_str(&content)?;
    debug!("loaded {} menu items from JSON snapshot", items.len());
    Ok(items)
}

/// Save menu items as a JSON snapshot for offline use.
pub fn save_menu<P: AsRef<Path>>(path: P, items: &[MenuItem]) -> Result<()> {
    let json = serde_json::to_string_pretty(items)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load menu items from a CSV snapshot.
///
/// Expects a header row: place,name,type,calories,carbs,protein,fat.
pub fn load_menu_csv<P: AsRef<Path>>(path: P) -> Result<Vec<MenuItem>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut items = Vec::new();
    for record in reader.deserialize() {
        items.push(record?);
    }
    debug!("loaded {} menu items from CSV snapshot", items.len());
    Ok(items)
}

/// Load a snapshot by file extension: `.csv` as CSV, anything else as JSON.
pub fn load_menu_file<P: AsRef<Path>>(path: P) -> Result<Vec<MenuItem>> {
    let path = path.as_ref();
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => load_menu_csv(path),
        _ => load_menu(path),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::models::MealSlot;

    #[test]
    fn test_json_roundtrip() {
        let items = vec![MenuItem {
            place: "Student Hall".to_string(),
            name: "Bibimbap".to_string(),
            slot: MealSlot::Lunch,
            calories: 650,
            carbs: 90,
            protein: 20,
            fat: 18,
        }];

        let file = NamedTempFile::new().unwrap();
        save_menu(file.path(), &items).unwrap();

        let reloaded = load_menu(file.path()).unwrap();
        assert_eq!(reloaded, items);
    }

    #[test]
    fn test_load_csv_snapshot() {
        let csv = "place,name,type,calories,carbs,protein,fat\n\
                   Student Hall,Bibimbap,lunch,650,90,20,18\n\
                   Salady,Chicken Salad,dinner,450,25,30,14\n";

        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(csv.as_bytes()).unwrap();

        let items = load_menu_csv(file.path()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].slot, MealSlot::Lunch);
        assert_eq!(items[1].place, "Salady");
        assert_eq!(items[1].calories, 450);
    }

    #[test]
    fn test_extension_dispatch() {
        let csv = "place,name,type,calories,carbs,protein,fat\n\
                   Student Hall,Toast Set,breakfast,400,55,12,9\n";
        let mut csv_file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        csv_file.write_all(csv.as_bytes()).unwrap();

        let items = load_menu_file(csv_file.path()).unwrap();
        assert_eq!(items[0].slot, MealSlot::Breakfast);

        let json_file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        save_menu(json_file.path(), &items).unwrap();
        let reloaded = load_menu_file(json_file.path()).unwrap();
        assert_eq!(reloaded, items);
    }
}
