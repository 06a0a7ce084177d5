use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Seniority tier shared by pilots and cabin crew.
#[derive(Debug, Display, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Seniority {
    Senior,
    Junior,
    /// Anything the directory sends that is neither of the above; counted in no rule.
    Unranked,
}

impl From<&str> for Seniority {
    fn from(value: &str) -> Self {
        match value.trim().to_uppercase().as_str() {
            "SENIOR" => Seniority::Senior,
            "JUNIOR" => Seniority::Junior,
            _ => Seniority::Unranked,
        }
    }
}

impl From<String> for Seniority {
    fn from(value: String) -> Self { Seniority::from(value.as_str()) }
}

impl From<Seniority> for String {
    fn from(value: Seniority) -> Self { value.to_string() }
}

/// Cabin crew role tag.
#[derive(Debug, Display, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
#[strum(serialize_all = "UPPERCASE")]
pub enum CrewRole {
    Chief,
    Chef,
    Regular,
}

impl From<&str> for CrewRole {
    fn from(value: &str) -> Self {
        match value.trim().to_uppercase().as_str() {
            "CHIEF" => CrewRole::Chief,
            "CHEF" => CrewRole::Chef,
            _ => CrewRole::Regular,
        }
    }
}

impl From<String> for CrewRole {
    fn from(value: String) -> Self { CrewRole::from(value.as_str()) }
}

impl From<CrewRole> for String {
    fn from(value: CrewRole) -> Self { value.to_string() }
}

/// Common view on a pilot or crew member as offered by the candidate directory.
pub trait Candidate {
    fn id(&self) -> u64;
    fn name(&self) -> &str;
    fn seniority(&self) -> Seniority;
    /// Aircraft type names the person is certified for.
    fn certified_types(&self) -> Vec<&str>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pilot {
    id: u64,
    name: String,
    #[serde(default)]
    age: u32,
    #[serde(default)]
    gender: String,
    #[serde(default)]
    nationality: String,
    #[serde(default)]
    allowed_range_km: u32,
    #[serde(default)]
    allowed_vehicle_type: String,
    seniority_level: Seniority,
    #[serde(default)]
    languages: Vec<String>,
}

impl Pilot {
    pub fn new(id: u64, name: &str, seniority: Seniority, vehicle_type: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            age: 0,
            gender: String::new(),
            nationality: String::new(),
            allowed_range_km: 0,
            allowed_vehicle_type: vehicle_type.to_string(),
            seniority_level: seniority,
            languages: Vec::new(),
        }
    }

    pub fn age(&self) -> u32 { self.age }
    pub fn gender(&self) -> &str { &self.gender }
    pub fn nationality(&self) -> &str { &self.nationality }
    pub fn allowed_range_km(&self) -> u32 { self.allowed_range_km }
    pub fn allowed_vehicle_type(&self) -> &str { &self.allowed_vehicle_type }
    pub fn languages(&self) -> &[String] { &self.languages }
}

impl Candidate for Pilot {
    fn id(&self) -> u64 { self.id }
    fn name(&self) -> &str { &self.name }
    fn seniority(&self) -> Seniority { self.seniority_level }
    fn certified_types(&self) -> Vec<&str> {
        if self.allowed_vehicle_type.trim().is_empty() {
            Vec::new()
        } else {
            vec![self.allowed_vehicle_type.as_str()]
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrewMember {
    id: u64,
    name: String,
    #[serde(default)]
    age: u32,
    #[serde(default)]
    gender: String,
    #[serde(default)]
    nationality: String,
    #[serde(rename = "type")]
    role: CrewRole,
    seniority: Seniority,
    #[serde(default)]
    languages: Vec<String>,
    #[serde(default)]
    allowed_vehicles: Vec<String>,
    #[serde(default)]
    chef_recipes: Vec<String>,
}

impl CrewMember {
    pub fn new(id: u64, name: &str, role: CrewRole, seniority: Seniority, vehicles: &[&str]) -> Self {
        Self {
            id,
            name: name.to_string(),
            age: 0,
            gender: String::new(),
            nationality: String::new(),
            role,
            seniority,
            languages: Vec::new(),
            allowed_vehicles: vehicles.iter().map(ToString::to_string).collect(),
            chef_recipes: Vec::new(),
        }
    }

    pub fn role(&self) -> CrewRole { self.role }
    pub fn is_chef(&self) -> bool { self.role == CrewRole::Chef }
    pub fn age(&self) -> u32 { self.age }
    pub fn gender(&self) -> &str { &self.gender }
    pub fn nationality(&self) -> &str { &self.nationality }
    pub fn languages(&self) -> &[String] { &self.languages }
    pub fn allowed_vehicles(&self) -> &[String] { &self.allowed_vehicles }
    pub fn chef_recipes(&self) -> &[String] { &self.chef_recipes }
}

impl Candidate for CrewMember {
    fn id(&self) -> u64 { self.id }
    fn name(&self) -> &str { &self.name }
    fn seniority(&self) -> Seniority { self.seniority }
    fn certified_types(&self) -> Vec<&str> { self.allowed_vehicles.iter().map(String::as_str).collect() }
}
