use crate::domain::model::PlaceQuery;

/// 預設地標：(輸出鍵, 搜尋字串)
const DEFAULT_PLACES: [(&str, &str); 9] = [
    ("Tour Eiffel", "Tour Eiffel"),
    ("Colisee", "Colosseum"),
    ("Acropole", "Acropolis"),
    ("Masjid al-Haram", "Masjid al-Haram"),
    ("Fontaine de Trevi", "Trevi fountain"),
    ("Porte de l'Inde", "Gateway Of India"),
    ("Place de la Constitution", "Plaza de la Constitución, Mexico"),
    ("Musée du Louvre", "Louvre Museum"),
    ("Taj Mahal", "Taj Mahal"),
];

/// The built-in landmark catalog, in processing order.
pub fn default_catalog() -> Vec<PlaceQuery> {
    DEFAULT_PLACES
        .iter()
        .map(|(key, term)| PlaceQuery::new(*key, *term))
        .collect()
}
