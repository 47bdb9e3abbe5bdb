//! Aviation entities
//!
//! Each entity carries its GraphQL object type, typed column and relation
//! handles, row codecs, its `*WhereInput` and its sortable fields.

pub mod airport;
pub mod city;
pub mod country;
pub mod enums;
pub mod region;
pub mod state;

pub use airport::{
    Airport, AirportConnection, AirportOrder, AirportOrderField, AirportWhereInput,
};
pub use city::{City, CityConnection, CityOrder, CityOrderField, CityWhereInput};
pub use country::{Country, CountryConnection, CountryOrder, CountryOrderField, CountryWhereInput};
pub use region::{Region, RegionConnection, RegionOrder, RegionOrderField, RegionWhereInput};
pub use state::{State, StateConnection, StateOrder, StateOrderField, StateWhereInput};

#[cfg(test)]
pub(crate) mod fixtures {
    //! Small seeded dataset shared by entity tests:
    //! Illinois (Chicago, Springfield) and Colorado (Denver), with ORD and MDW
    //! in Chicago, DEN in Denver and an unattached heliport.

    use super::enums::*;
    use super::*;
    use crate::db::{Database, schema_sync};
    use crate::orm::{now, repository};

    fn id(prefix: &str, n: u32) -> String {
        format!("{}-{:04}", prefix, n)
    }

    pub fn blank_airport(airport_id: &str) -> Airport {
        let now = now();
        Airport {
            id: format!("ap-{}", airport_id),
            created_at: now,
            updated_at: now,
            site_id: String::new(),
            facility_type: FacilityType::Airport,
            airport_id: airport_id.to_string(),
            ado_code: String::new(),
            name: String::new(),
            ownership_type: OwnershipType::Public,
            usage: FacilityUse::Public,
            latitude: 0.0,
            longitude: 0.0,
            location_survey_method: None,
            elevation: 0.0,
            elevation_survey_method: None,
            magnetic_variance: 0,
            magnetic_variance_year: None,
            traffic_pattern_altitude: 0,
            chart_name: String::new(),
            distance_to_city: 0,
            direction_to_city: None,
            acreage: 0,
            artcc_id: String::new(),
            artcc_name: String::new(),
            computer_id: String::new(),
            fss_on_airport: false,
            fss_id: String::new(),
            fss_name: String::new(),
            phone_number: String::new(),
            toll_free_number: String::new(),
            alternate_fss_id: String::new(),
            alternate_fss_name: String::new(),
            alternate_toll_free_number: String::new(),
            notam_id: String::new(),
            notam_flag: false,
            activation_date: None,
            status: OperationalStatus::Operational,
            far_139_class: None,
            arff_index: None,
            arff_certification_date: None,
            far_139_carrier_service_code: None,
            asp_code: String::new(),
            airspace_analysis_determination: None,
            customs_airport_of_entry: false,
            customs_landing_rights: false,
            joint_use: false,
            military_landing_rights: false,
            inspection_method: None,
            inspector_code: None,
            last_inspection: None,
            last_info_response: None,
            fuel_types: String::new(),
            airframe_repair_service: None,
            power_plant_repair_service: None,
            bottled_oxygen_type: None,
            bulk_oxygen_type: None,
            lighting_schedule: None,
            beacon_lighting_schedule: None,
            tower_type: None,
            segmented_circle_marker: None,
            beacon_lens_color: None,
            landing_fee: false,
            medical_use: false,
            based_single_engine: 0,
            based_multi_engine_aircraft: 0,
            based_jet_engine_aircraft: 0,
            based_helicopters: 0,
            based_gliders: 0,
            based_military_aircraft: 0,
            based_ultralight_aircraft: 0,
            commercial_operations: 0,
            commuter_operations: 0,
            air_taxi_operations: 0,
            general_aviation_local_operations: 0,
            general_aviation_itinerant_operations: 0,
            military_operations: 0,
            annual_operations_date: None,
            airport_position_source: String::new(),
            airport_position_source_date: None,
            airport_elevation_source: String::new(),
            airport_elevation_source_date: None,
            contract_fuel: false,
            transient_buoy_storage: false,
            transient_hangar_storage: false,
            transient_tie_down_storage: false,
            other_services: String::new(),
            icao_id: String::new(),
            minimum_operational_network: false,
            customs_user_fee: false,
            wind_indicator_flag: None,
            altitude_correction_temperature: None,
            state_id: None,
            city_id: None,
            region_id: None,
        }
    }

    pub async fn empty() -> Database {
        let db = Database::connect_in_memory().await.unwrap();
        schema_sync::sync_schema(db.pool()).await.unwrap();
        db
    }

    pub async fn seeded() -> Database {
        let db = empty().await;
        let pool = db.pool();
        let now = now();

        let states = [("IL", "Illinois"), ("CO", "Colorado")];
        for (n, (code, name)) in states.iter().enumerate() {
            let state = State {
                id: id("st", n as u32),
                created_at: now,
                updated_at: now,
                code: code.to_string(),
                name: name.to_string(),
            };
            repository::insert(pool, &state).await.unwrap();
        }

        let regions = [("AGL", "Great Lakes"), ("ANM", "Northwest Mountain")];
        for (n, (code, name)) in regions.iter().enumerate() {
            let region = Region {
                id: id("rg", n as u32),
                created_at: now,
                updated_at: now,
                code: code.to_string(),
                name: name.to_string(),
            };
            repository::insert(pool, &region).await.unwrap();
        }

        let cities = [("Chicago", 0), ("Denver", 1), ("Springfield", 0)];
        for (n, (name, state)) in cities.iter().enumerate() {
            let city = City {
                id: id("ct", n as u32),
                created_at: now,
                updated_at: now,
                name: name.to_string(),
                state_id: Some(id("st", *state)),
            };
            repository::insert(pool, &city).await.unwrap();
        }

        let country = Country {
            id: id("co", 0),
            created_at: now,
            updated_at: now,
            code: "US".to_string(),
            name: "United States".to_string(),
        };
        repository::insert(pool, &country).await.unwrap();

        let airports = [
            Airport {
                name: "Chicago O'Hare Intl".to_string(),
                icao_id: "KORD".to_string(),
                elevation: 680.0,
                commercial_operations: 250_000,
                tower_type: Some(TowerType::AirTrafficControlTower),
                fuel_types: "100LL,A".to_string(),
                state_id: Some(id("st", 0)),
                city_id: Some(id("ct", 0)),
                region_id: Some(id("rg", 0)),
                ..blank_airport("ORD")
            },
            Airport {
                name: "Chicago Midway Intl".to_string(),
                icao_id: "KMDW".to_string(),
                elevation: 620.0,
                commercial_operations: 50_000,
                tower_type: Some(TowerType::AirTrafficControlTower),
                state_id: Some(id("st", 0)),
                city_id: Some(id("ct", 0)),
                region_id: Some(id("rg", 0)),
                ..blank_airport("MDW")
            },
            Airport {
                name: "Denver Intl".to_string(),
                icao_id: "KDEN".to_string(),
                elevation: 5434.0,
                commercial_operations: 300_000,
                tower_type: Some(TowerType::AirTrafficControlTower),
                state_id: Some(id("st", 1)),
                city_id: Some(id("ct", 1)),
                region_id: Some(id("rg", 1)),
                ..blank_airport("DEN")
            },
            Airport {
                name: "Rooftop Heliport".to_string(),
                facility_type: FacilityType::Heliport,
                ownership_type: OwnershipType::Private,
                usage: FacilityUse::Private,
                elevation: 600.0,
                ..blank_airport("7IL9")
            },
        ];
        for airport in &airports {
            repository::insert(pool, airport).await.unwrap();
        }

        db
    }
}
