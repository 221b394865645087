//! Sample datasets shared by unit tests

use std::fs;

use tempfile::TempDir;

use super::{DataFiles, DatasetLoader, Datasets};

pub const FOOTFALL_CSV: &str = "\
state,year,domestic_visitors,foreign_visitors
Goa,2019,7000000,900000
Kerala,2019,18000000,1100000
Rajasthan,2019,52000000,1600000
Goa,2020,2500000,300000
Kerala,2020,4900000,340000
Goa,2018,7100000,930000
";

pub const PLACES_CSV: &str = "\
name,type,description,latitude,longitude,entry_fee,popularity
Taj Mahal,Monument,\"Ivory-white marble mausoleum, Agra\",27.1751,78.0421,50,5
Hawa Mahal,Palace,Palace of Winds,26.9239,75.8267,200,4
Baga Beach,Beach,Lively beach <north Goa>,15.5553,73.7517,0,3
";

pub const SERVICES_CSV: &str = "\
name,type,region,rating,contact
Delhi Heritage Walks,Guide,North,4.5,+91-11-0000-0001
Pink City Cabs,Transport,North,3.8,+91-141-000-0002
Backwater Houseboats,Accommodation,South,4.9,+91-477-000-0003
Konkan Rail Tours,Transport,West,4.2,+91-22-0000-0004
";

pub const SCAMS_JSON: &str = r#"{
  "scams": [
    {"city": "Agra", "type": "Fake Guide", "description": "Unlicensed guides near the gate",
     "severity": "High", "prevention": "Hire guides from the official counter", "location": [27.1767, 78.0081]},
    {"city": "Jaipur", "type": "Gem Scam", "description": "Worthless stones sold as investment",
     "severity": "Medium", "prevention": "Never buy gems for resale", "location": [26.9124, 75.7873]},
    {"city": "Goa", "type": "Taxi Overcharge", "description": "No meter fares",
     "severity": "High", "prevention": "Use prepaid taxi booths", "location": [15.4909, 73.8278]}
  ]
}"#;

pub const TIPS_JSON: &str = r#"{
  "states": [
    {"name": "Rajasthan",
     "cultural_tips": ["Cover your head in temples", "Remove shoes before entering homes"],
     "local_phrases": ["Khamma Ghani - Hello", "Padharo Mhare Des - Welcome"],
     "dos": ["Carry water", "Bargain politely"],
     "donts": ["Do not touch idols"],
     "famous_foods": ["Dal Baati Churma", "Ghevar", "Laal Maas"]},
    {"name": "Kerala",
     "cultural_tips": ["Dress modestly"],
     "local_phrases": ["Namaskaram - Hello"],
     "dos": ["Try a houseboat stay"],
     "donts": ["Do not litter the backwaters", "Do not point feet at people"],
     "famous_foods": ["Appam", "Puttu"]}
  ]
}"#;

/// A temporary directory holding the five sample input files
pub fn sample_data_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(super::FOOTFALL_FILE), FOOTFALL_CSV).unwrap();
    fs::write(dir.path().join(super::PLACES_FILE), PLACES_CSV).unwrap();
    fs::write(dir.path().join(super::SERVICES_FILE), SERVICES_CSV).unwrap();
    fs::write(dir.path().join(super::SCAMS_FILE), SCAMS_JSON).unwrap();
    fs::write(dir.path().join(super::TIPS_FILE), TIPS_JSON).unwrap();
    dir
}

pub fn sample_datasets() -> Datasets {
    let dir = sample_data_dir();
    DatasetLoader::load(&DataFiles::new(dir.path())).unwrap()
}
