//! Airports: the FAA 5010 facility record
//!
//! Enumerated columns store the FAA tokens. Fields the FAA leaves blank are
//! nullable. `fuel_types` and `other_services` hold comma-separated codes that
//! are checked against their vocabularies when written.

use async_graphql::{ComplexObject, Context, Enum, ErrorExtensions, InputObject, SimpleObject};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::db::Database;
use crate::define_connection;
use crate::graphql::filters::{
    BoolFilter, DateFilter, EnumFilter, FloatFilter, IdFilter, IntFilter, Order, SortField,
    StringFilter, WhereBuilder,
};
use crate::orm::predicate::{Enum, FieldEnum, Flag, Float, Int, Key, Text, Time};
use crate::orm::{
    Cardinality, Column, ColumnDef, ColumnKind, DatabaseEntity, DatabaseFilter, EntityQuery,
    FromSqlRow, Predicate, PredicateError, Relation, RelationDef, SqlValue, ToSqlRow, row_enum,
    row_enum_opt, row_time, row_time_opt,
};

use super::city::{City, CityWhereInput};
use super::enums::{
    AirspaceDetermination, ArffIndex, BeaconLensColor, Direction, FacilityType, FacilityUse,
    Far139CarrierService, Far139Class, InspectionMethod, InspectorCode, LightingSchedule,
    OperationalStatus, OwnershipType, OxygenType, RepairService, SegmentedCircle, SurveyMethod,
    TowerType, WindIndicator,
};
use super::region::{Region, RegionWhereInput};
use super::state::{State, StateWhereInput};

/// Fuel codes accepted in `fuel_types`
pub const FUEL_TYPES: &[&str] = &[
    "100", "100LL", "A", "A+", "A++", "A++10", "A1", "A1+", "J5", "J8", "J8+10", "J", "MOGAS",
    "UL91", "UL94", "UL100",
];

/// Service codes accepted in `other_services`
pub const OTHER_SERVICES: &[&str] = &[
    "AFRT", "AGRI", "AMB", "AVNCS", "BCHGR", "CARGO", "CHTR", "GLD", "INSTR", "PAJA", "RNTL",
    "SALES", "SURV", "TOW",
];

/// Canonicalise a comma-separated code list: trims entries, drops blanks and
/// duplicates, and rejects codes outside `vocabulary`.
pub fn normalize_code_list(
    field: &'static str,
    raw: &str,
    vocabulary: &[&str],
) -> Result<String, PredicateError> {
    let mut codes: Vec<&str> = Vec::new();
    for code in raw.split(',').map(str::trim).filter(|c| !c.is_empty()) {
        if !vocabulary.contains(&code) {
            return Err(PredicateError::invalid(
                Airport::TYPE_NAME,
                field,
                format!("unknown code \"{}\"", code),
            ));
        }
        if !codes.contains(&code) {
            codes.push(code);
        }
    }
    Ok(codes.join(","))
}

#[derive(SimpleObject, Clone, Debug, Serialize)]
#[graphql(name = "Airport", complex)]
#[serde(rename_all = "PascalCase")]
pub struct Airport {
    #[graphql(name = "Id")]
    pub id: String,

    #[graphql(name = "CreatedAt")]
    pub created_at: DateTime<Utc>,

    #[graphql(name = "UpdatedAt")]
    pub updated_at: DateTime<Utc>,


    /// Landing facility site number (e.g. 04508.*A)
    #[graphql(name = "SiteId")]
    pub site_id: String,

    #[graphql(name = "FacilityType")]
    pub facility_type: FacilityType,

    /// FAA airport identifier, 3-4 characters (e.g. ORD, AL03)
    #[graphql(name = "AirportId")]
    pub airport_id: String,

    /// FAA district office code (e.g. DCA, TEC, MEM)
    #[graphql(name = "AdoCode")]
    pub ado_code: String,

    /// Common name of the facility
    #[graphql(name = "Name")]
    pub name: String,

    #[graphql(name = "OwnershipType")]
    pub ownership_type: OwnershipType,

    #[graphql(name = "Usage")]
    pub usage: FacilityUse,

    #[graphql(name = "Latitude")]
    pub latitude: f64,

    #[graphql(name = "Longitude")]
    pub longitude: f64,

    #[graphql(name = "LocationSurveyMethod")]
    pub location_survey_method: Option<SurveyMethod>,

    /// Elevation in feet MSL
    #[graphql(name = "Elevation")]
    pub elevation: f64,

    #[graphql(name = "ElevationSurveyMethod")]
    pub elevation_survey_method: Option<SurveyMethod>,

    #[graphql(name = "MagneticVariance")]
    pub magnetic_variance: i64,

    /// Magnetic variation epoch year
    #[graphql(name = "MagneticVarianceYear")]
    pub magnetic_variance_year: Option<i64>,

    #[graphql(name = "TrafficPatternAltitude")]
    pub traffic_pattern_altitude: i64,

    /// Sectional chart on which the facility appears
    #[graphql(name = "ChartName")]
    pub chart_name: String,

    /// Distance from the central business district in nautical miles
    #[graphql(name = "DistanceToCity")]
    pub distance_to_city: i64,

    #[graphql(name = "DirectionToCity")]
    pub direction_to_city: Option<Direction>,

    #[graphql(name = "Acreage")]
    pub acreage: i64,

    #[graphql(name = "ArtccId")]
    pub artcc_id: String,

    #[graphql(name = "ArtccName")]
    pub artcc_name: String,

    #[graphql(name = "ComputerId")]
    pub computer_id: String,

    /// Tie-in FSS physically located on the facility
    #[graphql(name = "FssOnAirport")]
    pub fss_on_airport: bool,

    #[graphql(name = "FssId")]
    pub fss_id: String,

    #[graphql(name = "FssName")]
    pub fss_name: String,

    #[graphql(name = "PhoneNumber")]
    pub phone_number: String,

    #[graphql(name = "TollFreeNumber")]
    pub toll_free_number: String,

    #[graphql(name = "AlternateFssId")]
    pub alternate_fss_id: String,

    #[graphql(name = "AlternateFssName")]
    pub alternate_fss_name: String,

    #[graphql(name = "AlternateTollFreeNumber")]
    pub alternate_toll_free_number: String,

    #[graphql(name = "NotamId")]
    pub notam_id: String,

    /// NOTAM D service available at the airport
    #[graphql(name = "NotamFlag")]
    pub notam_flag: bool,

    #[graphql(name = "ActivationDate")]
    pub activation_date: Option<DateTime<Utc>>,

    #[graphql(name = "Status")]
    pub status: OperationalStatus,

    /// FAR 139 airport class code
    #[graphql(name = "Far139Class")]
    pub far_139_class: Option<Far139Class>,

    /// ARFF certification index
    #[graphql(name = "ArffIndex")]
    pub arff_index: Option<ArffIndex>,

    #[graphql(name = "ArffCertificationDate")]
    pub arff_certification_date: Option<DateTime<Utc>>,

    #[graphql(name = "Far139CarrierServiceCode")]
    pub far_139_carrier_service_code: Option<Far139CarrierService>,

    /// Federal agreement codes
    #[graphql(name = "AspCode")]
    pub asp_code: String,

    #[graphql(name = "AirspaceAnalysisDetermination")]
    pub airspace_analysis_determination: Option<AirspaceDetermination>,

    #[graphql(name = "CustomsAirportOfEntry")]
    pub customs_airport_of_entry: bool,

    /// Foreign flights may land with customs permission
    #[graphql(name = "CustomsLandingRights")]
    pub customs_landing_rights: bool,

    /// Military/civil joint use agreement in place
    #[graphql(name = "JointUse")]
    pub joint_use: bool,

    /// Landing rights granted to the military
    #[graphql(name = "MilitaryLandingRights")]
    pub military_landing_rights: bool,

    #[graphql(name = "InspectionMethod")]
    pub inspection_method: Option<InspectionMethod>,

    #[graphql(name = "InspectorCode")]
    pub inspector_code: Option<InspectorCode>,

    /// Last physical inspection date
    #[graphql(name = "LastInspection")]
    pub last_inspection: Option<DateTime<Utc>>,

    /// Last date the owner or manager answered an information request
    #[graphql(name = "LastInfoResponse")]
    pub last_info_response: Option<DateTime<Utc>>,

    /// Comma-separated fuel types available for public use (e.g. 100LL,A)
    #[graphql(name = "FuelTypes")]
    pub fuel_types: String,

    #[graphql(name = "AirframeRepairService")]
    pub airframe_repair_service: Option<RepairService>,

    #[graphql(name = "PowerPlantRepairService")]
    pub power_plant_repair_service: Option<RepairService>,

    #[graphql(name = "BottledOxygenType")]
    pub bottled_oxygen_type: Option<OxygenType>,

    #[graphql(name = "BulkOxygenType")]
    pub bulk_oxygen_type: Option<OxygenType>,

    #[graphql(name = "LightingSchedule")]
    pub lighting_schedule: Option<LightingSchedule>,

    #[graphql(name = "BeaconLightingSchedule")]
    pub beacon_lighting_schedule: Option<LightingSchedule>,

    #[graphql(name = "TowerType")]
    pub tower_type: Option<TowerType>,

    #[graphql(name = "SegmentedCircleMarker")]
    pub segmented_circle_marker: Option<SegmentedCircle>,

    #[graphql(name = "BeaconLensColor")]
    pub beacon_lens_color: Option<BeaconLensColor>,

    /// Landing fee charged to non-commercial users
    #[graphql(name = "LandingFee")]
    pub landing_fee: bool,

    /// Landing facility used for medical purposes
    #[graphql(name = "MedicalUse")]
    pub medical_use: bool,

    /// Single engine general aviation aircraft based on the field
    #[graphql(name = "BasedSingleEngine")]
    pub based_single_engine: i64,

    #[graphql(name = "BasedMultiEngineAircraft")]
    pub based_multi_engine_aircraft: i64,

    #[graphql(name = "BasedJetEngineAircraft")]
    pub based_jet_engine_aircraft: i64,

    #[graphql(name = "BasedHelicopters")]
    pub based_helicopters: i64,

    #[graphql(name = "BasedGliders")]
    pub based_gliders: i64,

    #[graphql(name = "BasedMilitaryAircraft")]
    pub based_military_aircraft: i64,

    #[graphql(name = "BasedUltralightAircraft")]
    pub based_ultralight_aircraft: i64,

    /// Annual commercial operations
    #[graphql(name = "CommercialOperations")]
    pub commercial_operations: i64,

    #[graphql(name = "CommuterOperations")]
    pub commuter_operations: i64,

    #[graphql(name = "AirTaxiOperations")]
    pub air_taxi_operations: i64,

    /// Local GA operations (traffic pattern or within 20 miles)
    #[graphql(name = "GeneralAviationLocalOperations")]
    pub general_aviation_local_operations: i64,

    #[graphql(name = "GeneralAviationItinerantOperations")]
    pub general_aviation_itinerant_operations: i64,

    #[graphql(name = "MilitaryOperations")]
    pub military_operations: i64,

    /// End of the 12-month period the operation counts cover
    #[graphql(name = "AnnualOperationsDate")]
    pub annual_operations_date: Option<DateTime<Utc>>,

    #[graphql(name = "AirportPositionSource")]
    pub airport_position_source: String,

    #[graphql(name = "AirportPositionSourceDate")]
    pub airport_position_source_date: Option<DateTime<Utc>>,

    #[graphql(name = "AirportElevationSource")]
    pub airport_elevation_source: String,

    #[graphql(name = "AirportElevationSourceDate")]
    pub airport_elevation_source_date: Option<DateTime<Utc>>,

    #[graphql(name = "ContractFuel")]
    pub contract_fuel: bool,

    #[graphql(name = "TransientBuoyStorage")]
    pub transient_buoy_storage: bool,

    #[graphql(name = "TransientHangarStorage")]
    pub transient_hangar_storage: bool,

    #[graphql(name = "TransientTieDownStorage")]
    pub transient_tie_down_storage: bool,

    /// Comma-separated list of other services (e.g. AMB,CHTR)
    #[graphql(name = "OtherServices")]
    pub other_services: String,

    #[graphql(name = "IcaoId")]
    pub icao_id: String,

    /// Part of the minimum operational network (non-GPS approaches)
    #[graphql(name = "MinimumOperationalNetwork")]
    pub minimum_operational_network: bool,

    #[graphql(name = "CustomsUserFee")]
    pub customs_user_fee: bool,

    #[graphql(name = "WindIndicatorFlag")]
    pub wind_indicator_flag: Option<WindIndicator>,

    /// Cold temperature airport threshold in degrees Celsius
    #[graphql(name = "AltitudeCorrectionTemperature")]
    pub altitude_correction_temperature: Option<i64>,

    #[graphql(skip)]
    #[serde(skip)]
    pub state_id: Option<String>,

    #[graphql(skip)]
    #[serde(skip)]
    pub city_id: Option<String>,

    #[graphql(skip)]
    #[serde(skip)]
    pub region_id: Option<String>,
}

impl Airport {
    pub const ID: Column<Airport, Key> = Column::new("id");
    pub const CREATED_AT: Column<Airport, Time> = Column::new("created_at");
    pub const UPDATED_AT: Column<Airport, Time> = Column::new("updated_at");
    pub const SITE_ID: Column<Airport, Text> = Column::new("site_id");
    pub const FACILITY_TYPE: Column<Airport, Enum<FacilityType>> = Column::new("facility_type");
    pub const AIRPORT_ID: Column<Airport, Text> = Column::new("airport_id");
    pub const ADO_CODE: Column<Airport, Text> = Column::new("ado_code");
    pub const NAME: Column<Airport, Text> = Column::new("name");
    pub const OWNERSHIP_TYPE: Column<Airport, Enum<OwnershipType>> = Column::new("ownership_type");
    pub const USAGE: Column<Airport, Enum<FacilityUse>> = Column::new("usage");
    pub const LATITUDE: Column<Airport, Float> = Column::new("latitude");
    pub const LONGITUDE: Column<Airport, Float> = Column::new("longitude");
    pub const LOCATION_SURVEY_METHOD: Column<Airport, Enum<SurveyMethod>> =
        Column::new("location_survey_method");
    pub const ELEVATION: Column<Airport, Float> = Column::new("elevation");
    pub const ELEVATION_SURVEY_METHOD: Column<Airport, Enum<SurveyMethod>> =
        Column::new("elevation_survey_method");
    pub const MAGNETIC_VARIANCE: Column<Airport, Int> = Column::new("magnetic_variance");
    pub const MAGNETIC_VARIANCE_YEAR: Column<Airport, Int> = Column::new("magnetic_variance_year");
    pub const TRAFFIC_PATTERN_ALTITUDE: Column<Airport, Int> =
        Column::new("traffic_pattern_altitude");
    pub const CHART_NAME: Column<Airport, Text> = Column::new("chart_name");
    pub const DISTANCE_TO_CITY: Column<Airport, Int> = Column::new("distance_to_city");
    pub const DIRECTION_TO_CITY: Column<Airport, Enum<Direction>> =
        Column::new("direction_to_city");
    pub const ACREAGE: Column<Airport, Int> = Column::new("acreage");
    pub const ARTCC_ID: Column<Airport, Text> = Column::new("artcc_id");
    pub const ARTCC_NAME: Column<Airport, Text> = Column::new("artcc_name");
    pub const COMPUTER_ID: Column<Airport, Text> = Column::new("computer_id");
    pub const FSS_ON_AIRPORT: Column<Airport, Flag> = Column::new("fss_on_airport");
    pub const FSS_ID: Column<Airport, Text> = Column::new("fss_id");
    pub const FSS_NAME: Column<Airport, Text> = Column::new("fss_name");
    pub const PHONE_NUMBER: Column<Airport, Text> = Column::new("phone_number");
    pub const TOLL_FREE_NUMBER: Column<Airport, Text> = Column::new("toll_free_number");
    pub const ALTERNATE_FSS_ID: Column<Airport, Text> = Column::new("alternate_fss_id");
    pub const ALTERNATE_FSS_NAME: Column<Airport, Text> = Column::new("alternate_fss_name");
    pub const ALTERNATE_TOLL_FREE_NUMBER: Column<Airport, Text> =
        Column::new("alternate_toll_free_number");
    pub const NOTAM_ID: Column<Airport, Text> = Column::new("notam_id");
    pub const NOTAM_FLAG: Column<Airport, Flag> = Column::new("notam_flag");
    pub const ACTIVATION_DATE: Column<Airport, Time> = Column::new("activation_date");
    pub const STATUS: Column<Airport, Enum<OperationalStatus>> = Column::new("status");
    pub const FAR_139_CLASS: Column<Airport, Enum<Far139Class>> = Column::new("far_139_class");
    pub const ARFF_INDEX: Column<Airport, Enum<ArffIndex>> = Column::new("arff_index");
    pub const ARFF_CERTIFICATION_DATE: Column<Airport, Time> =
        Column::new("arff_certification_date");
    pub const FAR_139_CARRIER_SERVICE_CODE: Column<Airport, Enum<Far139CarrierService>> =
        Column::new("far_139_carrier_service_code");
    pub const ASP_CODE: Column<Airport, Text> = Column::new("asp_code");
    pub const AIRSPACE_ANALYSIS_DETERMINATION: Column<Airport, Enum<AirspaceDetermination>> =
        Column::new("airspace_analysis_determination");
    pub const CUSTOMS_AIRPORT_OF_ENTRY: Column<Airport, Flag> =
        Column::new("customs_airport_of_entry");
    pub const CUSTOMS_LANDING_RIGHTS: Column<Airport, Flag> = Column::new("customs_landing_rights");
    pub const JOINT_USE: Column<Airport, Flag> = Column::new("joint_use");
    pub const MILITARY_LANDING_RIGHTS: Column<Airport, Flag> =
        Column::new("military_landing_rights");
    pub const INSPECTION_METHOD: Column<Airport, Enum<InspectionMethod>> =
        Column::new("inspection_method");
    pub const INSPECTOR_CODE: Column<Airport, Enum<InspectorCode>> = Column::new("inspector_code");
    pub const LAST_INSPECTION: Column<Airport, Time> = Column::new("last_inspection");
    pub const LAST_INFO_RESPONSE: Column<Airport, Time> = Column::new("last_info_response");
    pub const FUEL_TYPES: Column<Airport, Text> = Column::new("fuel_types");
    pub const AIRFRAME_REPAIR_SERVICE: Column<Airport, Enum<RepairService>> =
        Column::new("airframe_repair_service");
    pub const POWER_PLANT_REPAIR_SERVICE: Column<Airport, Enum<RepairService>> =
        Column::new("power_plant_repair_service");
    pub const BOTTLED_OXYGEN_TYPE: Column<Airport, Enum<OxygenType>> =
        Column::new("bottled_oxygen_type");
    pub const BULK_OXYGEN_TYPE: Column<Airport, Enum<OxygenType>> = Column::new("bulk_oxygen_type");
    pub const LIGHTING_SCHEDULE: Column<Airport, Enum<LightingSchedule>> =
        Column::new("lighting_schedule");
    pub const BEACON_LIGHTING_SCHEDULE: Column<Airport, Enum<LightingSchedule>> =
        Column::new("beacon_lighting_schedule");
    pub const TOWER_TYPE: Column<Airport, Enum<TowerType>> = Column::new("tower_type");
    pub const SEGMENTED_CIRCLE_MARKER: Column<Airport, Enum<SegmentedCircle>> =
        Column::new("segmented_circle_marker");
    pub const BEACON_LENS_COLOR: Column<Airport, Enum<BeaconLensColor>> =
        Column::new("beacon_lens_color");
    pub const LANDING_FEE: Column<Airport, Flag> = Column::new("landing_fee");
    pub const MEDICAL_USE: Column<Airport, Flag> = Column::new("medical_use");
    pub const BASED_SINGLE_ENGINE: Column<Airport, Int> = Column::new("based_single_engine");
    pub const BASED_MULTI_ENGINE_AIRCRAFT: Column<Airport, Int> =
        Column::new("based_multi_engine_aircraft");
    pub const BASED_JET_ENGINE_AIRCRAFT: Column<Airport, Int> =
        Column::new("based_jet_engine_aircraft");
    pub const BASED_HELICOPTERS: Column<Airport, Int> = Column::new("based_helicopters");
    pub const BASED_GLIDERS: Column<Airport, Int> = Column::new("based_gliders");
    pub const BASED_MILITARY_AIRCRAFT: Column<Airport, Int> =
        Column::new("based_military_aircraft");
    pub const BASED_ULTRALIGHT_AIRCRAFT: Column<Airport, Int> =
        Column::new("based_ultralight_aircraft");
    pub const COMMERCIAL_OPERATIONS: Column<Airport, Int> = Column::new("commercial_operations");
    pub const COMMUTER_OPERATIONS: Column<Airport, Int> = Column::new("commuter_operations");
    pub const AIR_TAXI_OPERATIONS: Column<Airport, Int> = Column::new("air_taxi_operations");
    pub const GENERAL_AVIATION_LOCAL_OPERATIONS: Column<Airport, Int> =
        Column::new("general_aviation_local_operations");
    pub const GENERAL_AVIATION_ITINERANT_OPERATIONS: Column<Airport, Int> =
        Column::new("general_aviation_itinerant_operations");
    pub const MILITARY_OPERATIONS: Column<Airport, Int> = Column::new("military_operations");
    pub const ANNUAL_OPERATIONS_DATE: Column<Airport, Time> = Column::new("annual_operations_date");
    pub const AIRPORT_POSITION_SOURCE: Column<Airport, Text> =
        Column::new("airport_position_source");
    pub const AIRPORT_POSITION_SOURCE_DATE: Column<Airport, Time> =
        Column::new("airport_position_source_date");
    pub const AIRPORT_ELEVATION_SOURCE: Column<Airport, Text> =
        Column::new("airport_elevation_source");
    pub const AIRPORT_ELEVATION_SOURCE_DATE: Column<Airport, Time> =
        Column::new("airport_elevation_source_date");
    pub const CONTRACT_FUEL: Column<Airport, Flag> = Column::new("contract_fuel");
    pub const TRANSIENT_BUOY_STORAGE: Column<Airport, Flag> = Column::new("transient_buoy_storage");
    pub const TRANSIENT_HANGAR_STORAGE: Column<Airport, Flag> =
        Column::new("transient_hangar_storage");
    pub const TRANSIENT_TIE_DOWN_STORAGE: Column<Airport, Flag> =
        Column::new("transient_tie_down_storage");
    pub const OTHER_SERVICES: Column<Airport, Text> = Column::new("other_services");
    pub const ICAO_ID: Column<Airport, Text> = Column::new("icao_id");
    pub const MINIMUM_OPERATIONAL_NETWORK: Column<Airport, Flag> =
        Column::new("minimum_operational_network");
    pub const CUSTOMS_USER_FEE: Column<Airport, Flag> = Column::new("customs_user_fee");
    pub const WIND_INDICATOR_FLAG: Column<Airport, Enum<WindIndicator>> =
        Column::new("wind_indicator_flag");
    pub const ALTITUDE_CORRECTION_TEMPERATURE: Column<Airport, Int> =
        Column::new("altitude_correction_temperature");

    pub const STATE: Relation<Airport, State> =
        Relation::new("state", Cardinality::ManyToOne, "state_id");
    pub const CITY: Relation<Airport, City> =
        Relation::new("city", Cardinality::ManyToOne, "city_id");
    pub const REGION: Relation<Airport, Region> =
        Relation::new("region", Cardinality::ManyToOne, "region_id");
}

impl DatabaseEntity for Airport {
    const TABLE_NAME: &'static str = "airports";
    const TYPE_NAME: &'static str = "Airport";
    const PLURAL_NAME: &'static str = "Airports";
    const DEFAULT_SORT: &'static str = "airport_id";

    fn columns() -> &'static [ColumnDef] {
        const COLUMNS: &[ColumnDef] = &[
            ColumnDef::primary_key("id"),
            ColumnDef::new("created_at", ColumnKind::Time),
            ColumnDef::new("updated_at", ColumnKind::Time),
            ColumnDef::new("site_id", ColumnKind::Text),
            ColumnDef::new("facility_type", ColumnKind::Enum(FacilityType::TOKENS)),
            ColumnDef::new("airport_id", ColumnKind::Text),
            ColumnDef::new("ado_code", ColumnKind::Text),
            ColumnDef::new("name", ColumnKind::Text),
            ColumnDef::new("ownership_type", ColumnKind::Enum(OwnershipType::TOKENS)),
            ColumnDef::new("usage", ColumnKind::Enum(FacilityUse::TOKENS)),
            ColumnDef::new("latitude", ColumnKind::Float),
            ColumnDef::new("longitude", ColumnKind::Float),
            ColumnDef::new("location_survey_method", ColumnKind::Enum(SurveyMethod::TOKENS))
                .optional(),
            ColumnDef::new("elevation", ColumnKind::Float),
            ColumnDef::new("elevation_survey_method", ColumnKind::Enum(SurveyMethod::TOKENS))
                .optional(),
            ColumnDef::new("magnetic_variance", ColumnKind::Int),
            ColumnDef::new("magnetic_variance_year", ColumnKind::Int).optional(),
            ColumnDef::new("traffic_pattern_altitude", ColumnKind::Int),
            ColumnDef::new("chart_name", ColumnKind::Text),
            ColumnDef::new("distance_to_city", ColumnKind::Int),
            ColumnDef::new("direction_to_city", ColumnKind::Enum(Direction::TOKENS)).optional(),
            ColumnDef::new("acreage", ColumnKind::Int),
            ColumnDef::new("artcc_id", ColumnKind::Text),
            ColumnDef::new("artcc_name", ColumnKind::Text),
            ColumnDef::new("computer_id", ColumnKind::Text),
            ColumnDef::new("fss_on_airport", ColumnKind::Bool),
            ColumnDef::new("fss_id", ColumnKind::Text),
            ColumnDef::new("fss_name", ColumnKind::Text),
            ColumnDef::new("phone_number", ColumnKind::Text),
            ColumnDef::new("toll_free_number", ColumnKind::Text),
            ColumnDef::new("alternate_fss_id", ColumnKind::Text),
            ColumnDef::new("alternate_fss_name", ColumnKind::Text),
            ColumnDef::new("alternate_toll_free_number", ColumnKind::Text),
            ColumnDef::new("notam_id", ColumnKind::Text),
            ColumnDef::new("notam_flag", ColumnKind::Bool),
            ColumnDef::new("activation_date", ColumnKind::Time).optional(),
            ColumnDef::new("status", ColumnKind::Enum(OperationalStatus::TOKENS)),
            ColumnDef::new("far_139_class", ColumnKind::Enum(Far139Class::TOKENS)).optional(),
            ColumnDef::new("arff_index", ColumnKind::Enum(ArffIndex::TOKENS)).optional(),
            ColumnDef::new("arff_certification_date", ColumnKind::Time).optional(),
            ColumnDef::new(
                "far_139_carrier_service_code",
                ColumnKind::Enum(Far139CarrierService::TOKENS),
            )
            .optional(),
            ColumnDef::new("asp_code", ColumnKind::Text),
            ColumnDef::new(
                "airspace_analysis_determination",
                ColumnKind::Enum(AirspaceDetermination::TOKENS),
            )
            .optional(),
            ColumnDef::new("customs_airport_of_entry", ColumnKind::Bool),
            ColumnDef::new("customs_landing_rights", ColumnKind::Bool),
            ColumnDef::new("joint_use", ColumnKind::Bool),
            ColumnDef::new("military_landing_rights", ColumnKind::Bool),
            ColumnDef::new("inspection_method", ColumnKind::Enum(InspectionMethod::TOKENS))
                .optional(),
            ColumnDef::new("inspector_code", ColumnKind::Enum(InspectorCode::TOKENS)).optional(),
            ColumnDef::new("last_inspection", ColumnKind::Time).optional(),
            ColumnDef::new("last_info_response", ColumnKind::Time).optional(),
            ColumnDef::new("fuel_types", ColumnKind::Text),
            ColumnDef::new("airframe_repair_service", ColumnKind::Enum(RepairService::TOKENS))
                .optional(),
            ColumnDef::new("power_plant_repair_service", ColumnKind::Enum(RepairService::TOKENS))
                .optional(),
            ColumnDef::new("bottled_oxygen_type", ColumnKind::Enum(OxygenType::TOKENS)).optional(),
            ColumnDef::new("bulk_oxygen_type", ColumnKind::Enum(OxygenType::TOKENS)).optional(),
            ColumnDef::new("lighting_schedule", ColumnKind::Enum(LightingSchedule::TOKENS))
                .optional(),
            ColumnDef::new("beacon_lighting_schedule", ColumnKind::Enum(LightingSchedule::TOKENS))
                .optional(),
            ColumnDef::new("tower_type", ColumnKind::Enum(TowerType::TOKENS)).optional(),
            ColumnDef::new("segmented_circle_marker", ColumnKind::Enum(SegmentedCircle::TOKENS))
                .optional(),
            ColumnDef::new("beacon_lens_color", ColumnKind::Enum(BeaconLensColor::TOKENS))
                .optional(),
            ColumnDef::new("landing_fee", ColumnKind::Bool),
            ColumnDef::new("medical_use", ColumnKind::Bool),
            ColumnDef::new("based_single_engine", ColumnKind::Int),
            ColumnDef::new("based_multi_engine_aircraft", ColumnKind::Int),
            ColumnDef::new("based_jet_engine_aircraft", ColumnKind::Int),
            ColumnDef::new("based_helicopters", ColumnKind::Int),
            ColumnDef::new("based_gliders", ColumnKind::Int),
            ColumnDef::new("based_military_aircraft", ColumnKind::Int),
            ColumnDef::new("based_ultralight_aircraft", ColumnKind::Int),
            ColumnDef::new("commercial_operations", ColumnKind::Int),
            ColumnDef::new("commuter_operations", ColumnKind::Int),
            ColumnDef::new("air_taxi_operations", ColumnKind::Int),
            ColumnDef::new("general_aviation_local_operations", ColumnKind::Int),
            ColumnDef::new("general_aviation_itinerant_operations", ColumnKind::Int),
            ColumnDef::new("military_operations", ColumnKind::Int),
            ColumnDef::new("annual_operations_date", ColumnKind::Time).optional(),
            ColumnDef::new("airport_position_source", ColumnKind::Text),
            ColumnDef::new("airport_position_source_date", ColumnKind::Time).optional(),
            ColumnDef::new("airport_elevation_source", ColumnKind::Text),
            ColumnDef::new("airport_elevation_source_date", ColumnKind::Time).optional(),
            ColumnDef::new("contract_fuel", ColumnKind::Bool),
            ColumnDef::new("transient_buoy_storage", ColumnKind::Bool),
            ColumnDef::new("transient_hangar_storage", ColumnKind::Bool),
            ColumnDef::new("transient_tie_down_storage", ColumnKind::Bool),
            ColumnDef::new("other_services", ColumnKind::Text),
            ColumnDef::new("icao_id", ColumnKind::Text),
            ColumnDef::new("minimum_operational_network", ColumnKind::Bool),
            ColumnDef::new("customs_user_fee", ColumnKind::Bool),
            ColumnDef::new("wind_indicator_flag", ColumnKind::Enum(WindIndicator::TOKENS))
                .optional(),
            ColumnDef::new("altitude_correction_temperature", ColumnKind::Int).optional(),
            ColumnDef::reference("state_id", "states"),
            ColumnDef::reference("city_id", "cities"),
            ColumnDef::reference("region_id", "regions"),
        ];
        COLUMNS
    }

    fn relations() -> &'static [RelationDef] {
        const RELATIONS: &[RelationDef] = &[
            Airport::STATE.def(),
            Airport::CITY.def(),
            Airport::REGION.def(),
        ];
        RELATIONS
    }
}

impl FromSqlRow for Airport {
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            created_at: row_time(row, "created_at")?,
            updated_at: row_time(row, "updated_at")?,
            site_id: row.try_get("site_id")?,
            facility_type: row_enum(row, "facility_type")?,
            airport_id: row.try_get("airport_id")?,
            ado_code: row.try_get("ado_code")?,
            name: row.try_get("name")?,
            ownership_type: row_enum(row, "ownership_type")?,
            usage: row_enum(row, "usage")?,
            latitude: row.try_get("latitude")?,
            longitude: row.try_get("longitude")?,
            location_survey_method: row_enum_opt(row, "location_survey_method")?,
            elevation: row.try_get("elevation")?,
            elevation_survey_method: row_enum_opt(row, "elevation_survey_method")?,
            magnetic_variance: row.try_get("magnetic_variance")?,
            magnetic_variance_year: row.try_get("magnetic_variance_year")?,
            traffic_pattern_altitude: row.try_get("traffic_pattern_altitude")?,
            chart_name: row.try_get("chart_name")?,
            distance_to_city: row.try_get("distance_to_city")?,
            direction_to_city: row_enum_opt(row, "direction_to_city")?,
            acreage: row.try_get("acreage")?,
            artcc_id: row.try_get("artcc_id")?,
            artcc_name: row.try_get("artcc_name")?,
            computer_id: row.try_get("computer_id")?,
            fss_on_airport: row.try_get("fss_on_airport")?,
            fss_id: row.try_get("fss_id")?,
            fss_name: row.try_get("fss_name")?,
            phone_number: row.try_get("phone_number")?,
            toll_free_number: row.try_get("toll_free_number")?,
            alternate_fss_id: row.try_get("alternate_fss_id")?,
            alternate_fss_name: row.try_get("alternate_fss_name")?,
            alternate_toll_free_number: row.try_get("alternate_toll_free_number")?,
            notam_id: row.try_get("notam_id")?,
            notam_flag: row.try_get("notam_flag")?,
            activation_date: row_time_opt(row, "activation_date")?,
            status: row_enum(row, "status")?,
            far_139_class: row_enum_opt(row, "far_139_class")?,
            arff_index: row_enum_opt(row, "arff_index")?,
            arff_certification_date: row_time_opt(row, "arff_certification_date")?,
            far_139_carrier_service_code: row_enum_opt(row, "far_139_carrier_service_code")?,
            asp_code: row.try_get("asp_code")?,
            airspace_analysis_determination: row_enum_opt(row, "airspace_analysis_determination")?,
            customs_airport_of_entry: row.try_get("customs_airport_of_entry")?,
            customs_landing_rights: row.try_get("customs_landing_rights")?,
            joint_use: row.try_get("joint_use")?,
            military_landing_rights: row.try_get("military_landing_rights")?,
            inspection_method: row_enum_opt(row, "inspection_method")?,
            inspector_code: row_enum_opt(row, "inspector_code")?,
            last_inspection: row_time_opt(row, "last_inspection")?,
            last_info_response: row_time_opt(row, "last_info_response")?,
            fuel_types: row.try_get("fuel_types")?,
            airframe_repair_service: row_enum_opt(row, "airframe_repair_service")?,
            power_plant_repair_service: row_enum_opt(row, "power_plant_repair_service")?,
            bottled_oxygen_type: row_enum_opt(row, "bottled_oxygen_type")?,
            bulk_oxygen_type: row_enum_opt(row, "bulk_oxygen_type")?,
            lighting_schedule: row_enum_opt(row, "lighting_schedule")?,
            beacon_lighting_schedule: row_enum_opt(row, "beacon_lighting_schedule")?,
            tower_type: row_enum_opt(row, "tower_type")?,
            segmented_circle_marker: row_enum_opt(row, "segmented_circle_marker")?,
            beacon_lens_color: row_enum_opt(row, "beacon_lens_color")?,
            landing_fee: row.try_get("landing_fee")?,
            medical_use: row.try_get("medical_use")?,
            based_single_engine: row.try_get("based_single_engine")?,
            based_multi_engine_aircraft: row.try_get("based_multi_engine_aircraft")?,
            based_jet_engine_aircraft: row.try_get("based_jet_engine_aircraft")?,
            based_helicopters: row.try_get("based_helicopters")?,
            based_gliders: row.try_get("based_gliders")?,
            based_military_aircraft: row.try_get("based_military_aircraft")?,
            based_ultralight_aircraft: row.try_get("based_ultralight_aircraft")?,
            commercial_operations: row.try_get("commercial_operations")?,
            commuter_operations: row.try_get("commuter_operations")?,
            air_taxi_operations: row.try_get("air_taxi_operations")?,
            general_aviation_local_operations: row.try_get("general_aviation_local_operations")?,
            general_aviation_itinerant_operations: row
                .try_get("general_aviation_itinerant_operations")?,
            military_operations: row.try_get("military_operations")?,
            annual_operations_date: row_time_opt(row, "annual_operations_date")?,
            airport_position_source: row.try_get("airport_position_source")?,
            airport_position_source_date: row_time_opt(row, "airport_position_source_date")?,
            airport_elevation_source: row.try_get("airport_elevation_source")?,
            airport_elevation_source_date: row_time_opt(row, "airport_elevation_source_date")?,
            contract_fuel: row.try_get("contract_fuel")?,
            transient_buoy_storage: row.try_get("transient_buoy_storage")?,
            transient_hangar_storage: row.try_get("transient_hangar_storage")?,
            transient_tie_down_storage: row.try_get("transient_tie_down_storage")?,
            other_services: row.try_get("other_services")?,
            icao_id: row.try_get("icao_id")?,
            minimum_operational_network: row.try_get("minimum_operational_network")?,
            customs_user_fee: row.try_get("customs_user_fee")?,
            wind_indicator_flag: row_enum_opt(row, "wind_indicator_flag")?,
            altitude_correction_temperature: row.try_get("altitude_correction_temperature")?,
            state_id: row.try_get("state_id")?,
            city_id: row.try_get("city_id")?,
            region_id: row.try_get("region_id")?,
        })
    }
}

impl ToSqlRow for Airport {
    fn to_sql_values(&self) -> Vec<SqlValue> {
        vec![
            self.id.clone().into(),
            self.created_at.into(),
            self.updated_at.into(),
            self.site_id.clone().into(),
            self.facility_type.token().into(),
            self.airport_id.clone().into(),
            self.ado_code.clone().into(),
            self.name.clone().into(),
            self.ownership_type.token().into(),
            self.usage.token().into(),
            self.latitude.into(),
            self.longitude.into(),
            SqlValue::opt(self.location_survey_method.map(|v| v.token())),
            self.elevation.into(),
            SqlValue::opt(self.elevation_survey_method.map(|v| v.token())),
            self.magnetic_variance.into(),
            SqlValue::opt(self.magnetic_variance_year),
            self.traffic_pattern_altitude.into(),
            self.chart_name.clone().into(),
            self.distance_to_city.into(),
            SqlValue::opt(self.direction_to_city.map(|v| v.token())),
            self.acreage.into(),
            self.artcc_id.clone().into(),
            self.artcc_name.clone().into(),
            self.computer_id.clone().into(),
            self.fss_on_airport.into(),
            self.fss_id.clone().into(),
            self.fss_name.clone().into(),
            self.phone_number.clone().into(),
            self.toll_free_number.clone().into(),
            self.alternate_fss_id.clone().into(),
            self.alternate_fss_name.clone().into(),
            self.alternate_toll_free_number.clone().into(),
            self.notam_id.clone().into(),
            self.notam_flag.into(),
            SqlValue::opt(self.activation_date),
            self.status.token().into(),
            SqlValue::opt(self.far_139_class.map(|v| v.token())),
            SqlValue::opt(self.arff_index.map(|v| v.token())),
            SqlValue::opt(self.arff_certification_date),
            SqlValue::opt(self.far_139_carrier_service_code.map(|v| v.token())),
            self.asp_code.clone().into(),
            SqlValue::opt(self.airspace_analysis_determination.map(|v| v.token())),
            self.customs_airport_of_entry.into(),
            self.customs_landing_rights.into(),
            self.joint_use.into(),
            self.military_landing_rights.into(),
            SqlValue::opt(self.inspection_method.map(|v| v.token())),
            SqlValue::opt(self.inspector_code.map(|v| v.token())),
            SqlValue::opt(self.last_inspection),
            SqlValue::opt(self.last_info_response),
            self.fuel_types.clone().into(),
            SqlValue::opt(self.airframe_repair_service.map(|v| v.token())),
            SqlValue::opt(self.power_plant_repair_service.map(|v| v.token())),
            SqlValue::opt(self.bottled_oxygen_type.map(|v| v.token())),
            SqlValue::opt(self.bulk_oxygen_type.map(|v| v.token())),
            SqlValue::opt(self.lighting_schedule.map(|v| v.token())),
            SqlValue::opt(self.beacon_lighting_schedule.map(|v| v.token())),
            SqlValue::opt(self.tower_type.map(|v| v.token())),
            SqlValue::opt(self.segmented_circle_marker.map(|v| v.token())),
            SqlValue::opt(self.beacon_lens_color.map(|v| v.token())),
            self.landing_fee.into(),
            self.medical_use.into(),
            self.based_single_engine.into(),
            self.based_multi_engine_aircraft.into(),
            self.based_jet_engine_aircraft.into(),
            self.based_helicopters.into(),
            self.based_gliders.into(),
            self.based_military_aircraft.into(),
            self.based_ultralight_aircraft.into(),
            self.commercial_operations.into(),
            self.commuter_operations.into(),
            self.air_taxi_operations.into(),
            self.general_aviation_local_operations.into(),
            self.general_aviation_itinerant_operations.into(),
            self.military_operations.into(),
            SqlValue::opt(self.annual_operations_date),
            self.airport_position_source.clone().into(),
            SqlValue::opt(self.airport_position_source_date),
            self.airport_elevation_source.clone().into(),
            SqlValue::opt(self.airport_elevation_source_date),
            self.contract_fuel.into(),
            self.transient_buoy_storage.into(),
            self.transient_hangar_storage.into(),
            self.transient_tie_down_storage.into(),
            self.other_services.clone().into(),
            self.icao_id.clone().into(),
            self.minimum_operational_network.into(),
            self.customs_user_fee.into(),
            SqlValue::opt(self.wind_indicator_flag.map(|v| v.token())),
            SqlValue::opt(self.altitude_correction_temperature),
            SqlValue::opt(self.state_id.clone()),
            SqlValue::opt(self.city_id.clone()),
            SqlValue::opt(self.region_id.clone()),
        ]
    }
}

#[ComplexObject]
impl Airport {
    #[graphql(name = "State")]
    async fn state(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<State>> {
        if self.state_id.is_none() {
            return Ok(None);
        }
        let db = ctx.data_unchecked::<Database>();
        EntityQuery::<State>::new()
            .filter(State::AIRPORTS.has_with([Airport::ID.eq(self.id.clone())]))
            .fetch_optional(db.pool())
            .await
            .map_err(|e| e.extend())
    }

    #[graphql(name = "City")]
    async fn city(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<City>> {
        if self.city_id.is_none() {
            return Ok(None);
        }
        let db = ctx.data_unchecked::<Database>();
        EntityQuery::<City>::new()
            .filter(City::AIRPORTS.has_with([Airport::ID.eq(self.id.clone())]))
            .fetch_optional(db.pool())
            .await
            .map_err(|e| e.extend())
    }

    #[graphql(name = "Region")]
    async fn region(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Region>> {
        if self.region_id.is_none() {
            return Ok(None);
        }
        let db = ctx.data_unchecked::<Database>();
        EntityQuery::<Region>::new()
            .filter(Region::AIRPORTS.has_with([Airport::ID.eq(self.id.clone())]))
            .fetch_optional(db.pool())
            .await
            .map_err(|e| e.extend())
    }
}

define_connection!(AirportConnection, AirportEdge, Airport);

#[derive(InputObject, Default, Clone, Debug)]
#[graphql(name = "AirportWhereInput")]
pub struct AirportWhereInput {
    #[graphql(name = "Not")]
    pub not: Option<Box<AirportWhereInput>>,
    #[graphql(name = "And")]
    pub and: Option<Vec<AirportWhereInput>>,
    #[graphql(name = "Or")]
    pub or: Option<Vec<AirportWhereInput>>,

    #[graphql(name = "Id")]
    pub id: Option<IdFilter>,
    #[graphql(name = "CreatedAt")]
    pub created_at: Option<DateFilter>,
    #[graphql(name = "UpdatedAt")]
    pub updated_at: Option<DateFilter>,
    #[graphql(name = "SiteId")]
    pub site_id: Option<StringFilter>,
    #[graphql(name = "FacilityType")]
    pub facility_type: Option<EnumFilter<FacilityType>>,
    #[graphql(name = "AirportId")]
    pub airport_id: Option<StringFilter>,
    #[graphql(name = "AdoCode")]
    pub ado_code: Option<StringFilter>,
    #[graphql(name = "Name")]
    pub name: Option<StringFilter>,
    #[graphql(name = "OwnershipType")]
    pub ownership_type: Option<EnumFilter<OwnershipType>>,
    #[graphql(name = "Usage")]
    pub usage: Option<EnumFilter<FacilityUse>>,
    #[graphql(name = "Latitude")]
    pub latitude: Option<FloatFilter>,
    #[graphql(name = "Longitude")]
    pub longitude: Option<FloatFilter>,
    #[graphql(name = "LocationSurveyMethod")]
    pub location_survey_method: Option<EnumFilter<SurveyMethod>>,
    #[graphql(name = "Elevation")]
    pub elevation: Option<FloatFilter>,
    #[graphql(name = "ElevationSurveyMethod")]
    pub elevation_survey_method: Option<EnumFilter<SurveyMethod>>,
    #[graphql(name = "MagneticVariance")]
    pub magnetic_variance: Option<IntFilter>,
    #[graphql(name = "MagneticVarianceYear")]
    pub magnetic_variance_year: Option<IntFilter>,
    #[graphql(name = "TrafficPatternAltitude")]
    pub traffic_pattern_altitude: Option<IntFilter>,
    #[graphql(name = "ChartName")]
    pub chart_name: Option<StringFilter>,
    #[graphql(name = "DistanceToCity")]
    pub distance_to_city: Option<IntFilter>,
    #[graphql(name = "DirectionToCity")]
    pub direction_to_city: Option<EnumFilter<Direction>>,
    #[graphql(name = "Acreage")]
    pub acreage: Option<IntFilter>,
    #[graphql(name = "ArtccId")]
    pub artcc_id: Option<StringFilter>,
    #[graphql(name = "ArtccName")]
    pub artcc_name: Option<StringFilter>,
    #[graphql(name = "ComputerId")]
    pub computer_id: Option<StringFilter>,
    #[graphql(name = "FssOnAirport")]
    pub fss_on_airport: Option<BoolFilter>,
    #[graphql(name = "FssId")]
    pub fss_id: Option<StringFilter>,
    #[graphql(name = "FssName")]
    pub fss_name: Option<StringFilter>,
    #[graphql(name = "PhoneNumber")]
    pub phone_number: Option<StringFilter>,
    #[graphql(name = "TollFreeNumber")]
    pub toll_free_number: Option<StringFilter>,
    #[graphql(name = "AlternateFssId")]
    pub alternate_fss_id: Option<StringFilter>,
    #[graphql(name = "AlternateFssName")]
    pub alternate_fss_name: Option<StringFilter>,
    #[graphql(name = "AlternateTollFreeNumber")]
    pub alternate_toll_free_number: Option<StringFilter>,
    #[graphql(name = "NotamId")]
    pub notam_id: Option<StringFilter>,
    #[graphql(name = "NotamFlag")]
    pub notam_flag: Option<BoolFilter>,
    #[graphql(name = "ActivationDate")]
    pub activation_date: Option<DateFilter>,
    #[graphql(name = "Status")]
    pub status: Option<EnumFilter<OperationalStatus>>,
    #[graphql(name = "Far139Class")]
    pub far_139_class: Option<EnumFilter<Far139Class>>,
    #[graphql(name = "ArffIndex")]
    pub arff_index: Option<EnumFilter<ArffIndex>>,
    #[graphql(name = "ArffCertificationDate")]
    pub arff_certification_date: Option<DateFilter>,
    #[graphql(name = "Far139CarrierServiceCode")]
    pub far_139_carrier_service_code: Option<EnumFilter<Far139CarrierService>>,
    #[graphql(name = "AspCode")]
    pub asp_code: Option<StringFilter>,
    #[graphql(name = "AirspaceAnalysisDetermination")]
    pub airspace_analysis_determination: Option<EnumFilter<AirspaceDetermination>>,
    #[graphql(name = "CustomsAirportOfEntry")]
    pub customs_airport_of_entry: Option<BoolFilter>,
    #[graphql(name = "CustomsLandingRights")]
    pub customs_landing_rights: Option<BoolFilter>,
    #[graphql(name = "JointUse")]
    pub joint_use: Option<BoolFilter>,
    #[graphql(name = "MilitaryLandingRights")]
    pub military_landing_rights: Option<BoolFilter>,
    #[graphql(name = "InspectionMethod")]
    pub inspection_method: Option<EnumFilter<InspectionMethod>>,
    #[graphql(name = "InspectorCode")]
    pub inspector_code: Option<EnumFilter<InspectorCode>>,
    #[graphql(name = "LastInspection")]
    pub last_inspection: Option<DateFilter>,
    #[graphql(name = "LastInfoResponse")]
    pub last_info_response: Option<DateFilter>,
    #[graphql(name = "FuelTypes")]
    pub fuel_types: Option<StringFilter>,
    #[graphql(name = "AirframeRepairService")]
    pub airframe_repair_service: Option<EnumFilter<RepairService>>,
    #[graphql(name = "PowerPlantRepairService")]
    pub power_plant_repair_service: Option<EnumFilter<RepairService>>,
    #[graphql(name = "BottledOxygenType")]
    pub bottled_oxygen_type: Option<EnumFilter<OxygenType>>,
    #[graphql(name = "BulkOxygenType")]
    pub bulk_oxygen_type: Option<EnumFilter<OxygenType>>,
    #[graphql(name = "LightingSchedule")]
    pub lighting_schedule: Option<EnumFilter<LightingSchedule>>,
    #[graphql(name = "BeaconLightingSchedule")]
    pub beacon_lighting_schedule: Option<EnumFilter<LightingSchedule>>,
    #[graphql(name = "TowerType")]
    pub tower_type: Option<EnumFilter<TowerType>>,
    #[graphql(name = "SegmentedCircleMarker")]
    pub segmented_circle_marker: Option<EnumFilter<SegmentedCircle>>,
    #[graphql(name = "BeaconLensColor")]
    pub beacon_lens_color: Option<EnumFilter<BeaconLensColor>>,
    #[graphql(name = "LandingFee")]
    pub landing_fee: Option<BoolFilter>,
    #[graphql(name = "MedicalUse")]
    pub medical_use: Option<BoolFilter>,
    #[graphql(name = "BasedSingleEngine")]
    pub based_single_engine: Option<IntFilter>,
    #[graphql(name = "BasedMultiEngineAircraft")]
    pub based_multi_engine_aircraft: Option<IntFilter>,
    #[graphql(name = "BasedJetEngineAircraft")]
    pub based_jet_engine_aircraft: Option<IntFilter>,
    #[graphql(name = "BasedHelicopters")]
    pub based_helicopters: Option<IntFilter>,
    #[graphql(name = "BasedGliders")]
    pub based_gliders: Option<IntFilter>,
    #[graphql(name = "BasedMilitaryAircraft")]
    pub based_military_aircraft: Option<IntFilter>,
    #[graphql(name = "BasedUltralightAircraft")]
    pub based_ultralight_aircraft: Option<IntFilter>,
    #[graphql(name = "CommercialOperations")]
    pub commercial_operations: Option<IntFilter>,
    #[graphql(name = "CommuterOperations")]
    pub commuter_operations: Option<IntFilter>,
    #[graphql(name = "AirTaxiOperations")]
    pub air_taxi_operations: Option<IntFilter>,
    #[graphql(name = "GeneralAviationLocalOperations")]
    pub general_aviation_local_operations: Option<IntFilter>,
    #[graphql(name = "GeneralAviationItinerantOperations")]
    pub general_aviation_itinerant_operations: Option<IntFilter>,
    #[graphql(name = "MilitaryOperations")]
    pub military_operations: Option<IntFilter>,
    #[graphql(name = "AnnualOperationsDate")]
    pub annual_operations_date: Option<DateFilter>,
    #[graphql(name = "AirportPositionSource")]
    pub airport_position_source: Option<StringFilter>,
    #[graphql(name = "AirportPositionSourceDate")]
    pub airport_position_source_date: Option<DateFilter>,
    #[graphql(name = "AirportElevationSource")]
    pub airport_elevation_source: Option<StringFilter>,
    #[graphql(name = "AirportElevationSourceDate")]
    pub airport_elevation_source_date: Option<DateFilter>,
    #[graphql(name = "ContractFuel")]
    pub contract_fuel: Option<BoolFilter>,
    #[graphql(name = "TransientBuoyStorage")]
    pub transient_buoy_storage: Option<BoolFilter>,
    #[graphql(name = "TransientHangarStorage")]
    pub transient_hangar_storage: Option<BoolFilter>,
    #[graphql(name = "TransientTieDownStorage")]
    pub transient_tie_down_storage: Option<BoolFilter>,
    #[graphql(name = "OtherServices")]
    pub other_services: Option<StringFilter>,
    #[graphql(name = "IcaoId")]
    pub icao_id: Option<StringFilter>,
    #[graphql(name = "MinimumOperationalNetwork")]
    pub minimum_operational_network: Option<BoolFilter>,
    #[graphql(name = "CustomsUserFee")]
    pub customs_user_fee: Option<BoolFilter>,
    #[graphql(name = "WindIndicatorFlag")]
    pub wind_indicator_flag: Option<EnumFilter<WindIndicator>>,
    #[graphql(name = "AltitudeCorrectionTemperature")]
    pub altitude_correction_temperature: Option<IntFilter>,

    #[graphql(name = "HasState")]
    pub has_state: Option<bool>,
    #[graphql(name = "HasStateWith")]
    pub has_state_with: Option<Vec<StateWhereInput>>,
    #[graphql(name = "HasCity")]
    pub has_city: Option<bool>,
    #[graphql(name = "HasCityWith")]
    pub has_city_with: Option<Vec<CityWhereInput>>,
    #[graphql(name = "HasRegion")]
    pub has_region: Option<bool>,
    #[graphql(name = "HasRegionWith")]
    pub has_region_with: Option<Vec<RegionWhereInput>>,
}

impl DatabaseFilter for AirportWhereInput {
    type Entity = Airport;

    fn to_predicate(&self) -> Result<Predicate<Airport>, PredicateError> {
        Ok(WhereBuilder::new()
            .combinators(&self.not, &self.and, &self.or)?
            .field(Airport::ID, &self.id)?
            .field(Airport::CREATED_AT, &self.created_at)?
            .field(Airport::UPDATED_AT, &self.updated_at)?
            .field(Airport::SITE_ID, &self.site_id)?
            .field(Airport::FACILITY_TYPE, &self.facility_type)?
            .field(Airport::AIRPORT_ID, &self.airport_id)?
            .field(Airport::ADO_CODE, &self.ado_code)?
            .field(Airport::NAME, &self.name)?
            .field(Airport::OWNERSHIP_TYPE, &self.ownership_type)?
            .field(Airport::USAGE, &self.usage)?
            .field(Airport::LATITUDE, &self.latitude)?
            .field(Airport::LONGITUDE, &self.longitude)?
            .field(Airport::LOCATION_SURVEY_METHOD, &self.location_survey_method)?
            .field(Airport::ELEVATION, &self.elevation)?
            .field(Airport::ELEVATION_SURVEY_METHOD, &self.elevation_survey_method)?
            .field(Airport::MAGNETIC_VARIANCE, &self.magnetic_variance)?
            .field(Airport::MAGNETIC_VARIANCE_YEAR, &self.magnetic_variance_year)?
            .field(Airport::TRAFFIC_PATTERN_ALTITUDE, &self.traffic_pattern_altitude)?
            .field(Airport::CHART_NAME, &self.chart_name)?
            .field(Airport::DISTANCE_TO_CITY, &self.distance_to_city)?
            .field(Airport::DIRECTION_TO_CITY, &self.direction_to_city)?
            .field(Airport::ACREAGE, &self.acreage)?
            .field(Airport::ARTCC_ID, &self.artcc_id)?
            .field(Airport::ARTCC_NAME, &self.artcc_name)?
            .field(Airport::COMPUTER_ID, &self.computer_id)?
            .field(Airport::FSS_ON_AIRPORT, &self.fss_on_airport)?
            .field(Airport::FSS_ID, &self.fss_id)?
            .field(Airport::FSS_NAME, &self.fss_name)?
            .field(Airport::PHONE_NUMBER, &self.phone_number)?
            .field(Airport::TOLL_FREE_NUMBER, &self.toll_free_number)?
            .field(Airport::ALTERNATE_FSS_ID, &self.alternate_fss_id)?
            .field(Airport::ALTERNATE_FSS_NAME, &self.alternate_fss_name)?
            .field(Airport::ALTERNATE_TOLL_FREE_NUMBER, &self.alternate_toll_free_number)?
            .field(Airport::NOTAM_ID, &self.notam_id)?
            .field(Airport::NOTAM_FLAG, &self.notam_flag)?
            .field(Airport::ACTIVATION_DATE, &self.activation_date)?
            .field(Airport::STATUS, &self.status)?
            .field(Airport::FAR_139_CLASS, &self.far_139_class)?
            .field(Airport::ARFF_INDEX, &self.arff_index)?
            .field(Airport::ARFF_CERTIFICATION_DATE, &self.arff_certification_date)?
            .field(Airport::FAR_139_CARRIER_SERVICE_CODE, &self.far_139_carrier_service_code)?
            .field(Airport::ASP_CODE, &self.asp_code)?
            .field(Airport::AIRSPACE_ANALYSIS_DETERMINATION, &self.airspace_analysis_determination)?
            .field(Airport::CUSTOMS_AIRPORT_OF_ENTRY, &self.customs_airport_of_entry)?
            .field(Airport::CUSTOMS_LANDING_RIGHTS, &self.customs_landing_rights)?
            .field(Airport::JOINT_USE, &self.joint_use)?
            .field(Airport::MILITARY_LANDING_RIGHTS, &self.military_landing_rights)?
            .field(Airport::INSPECTION_METHOD, &self.inspection_method)?
            .field(Airport::INSPECTOR_CODE, &self.inspector_code)?
            .field(Airport::LAST_INSPECTION, &self.last_inspection)?
            .field(Airport::LAST_INFO_RESPONSE, &self.last_info_response)?
            .field(Airport::FUEL_TYPES, &self.fuel_types)?
            .field(Airport::AIRFRAME_REPAIR_SERVICE, &self.airframe_repair_service)?
            .field(Airport::POWER_PLANT_REPAIR_SERVICE, &self.power_plant_repair_service)?
            .field(Airport::BOTTLED_OXYGEN_TYPE, &self.bottled_oxygen_type)?
            .field(Airport::BULK_OXYGEN_TYPE, &self.bulk_oxygen_type)?
            .field(Airport::LIGHTING_SCHEDULE, &self.lighting_schedule)?
            .field(Airport::BEACON_LIGHTING_SCHEDULE, &self.beacon_lighting_schedule)?
            .field(Airport::TOWER_TYPE, &self.tower_type)?
            .field(Airport::SEGMENTED_CIRCLE_MARKER, &self.segmented_circle_marker)?
            .field(Airport::BEACON_LENS_COLOR, &self.beacon_lens_color)?
            .field(Airport::LANDING_FEE, &self.landing_fee)?
            .field(Airport::MEDICAL_USE, &self.medical_use)?
            .field(Airport::BASED_SINGLE_ENGINE, &self.based_single_engine)?
            .field(Airport::BASED_MULTI_ENGINE_AIRCRAFT, &self.based_multi_engine_aircraft)?
            .field(Airport::BASED_JET_ENGINE_AIRCRAFT, &self.based_jet_engine_aircraft)?
            .field(Airport::BASED_HELICOPTERS, &self.based_helicopters)?
            .field(Airport::BASED_GLIDERS, &self.based_gliders)?
            .field(Airport::BASED_MILITARY_AIRCRAFT, &self.based_military_aircraft)?
            .field(Airport::BASED_ULTRALIGHT_AIRCRAFT, &self.based_ultralight_aircraft)?
            .field(Airport::COMMERCIAL_OPERATIONS, &self.commercial_operations)?
            .field(Airport::COMMUTER_OPERATIONS, &self.commuter_operations)?
            .field(Airport::AIR_TAXI_OPERATIONS, &self.air_taxi_operations)?
            .field(
                Airport::GENERAL_AVIATION_LOCAL_OPERATIONS,
                &self.general_aviation_local_operations,
            )?
            .field(
                Airport::GENERAL_AVIATION_ITINERANT_OPERATIONS,
                &self.general_aviation_itinerant_operations,
            )?
            .field(Airport::MILITARY_OPERATIONS, &self.military_operations)?
            .field(Airport::ANNUAL_OPERATIONS_DATE, &self.annual_operations_date)?
            .field(Airport::AIRPORT_POSITION_SOURCE, &self.airport_position_source)?
            .field(Airport::AIRPORT_POSITION_SOURCE_DATE, &self.airport_position_source_date)?
            .field(Airport::AIRPORT_ELEVATION_SOURCE, &self.airport_elevation_source)?
            .field(Airport::AIRPORT_ELEVATION_SOURCE_DATE, &self.airport_elevation_source_date)?
            .field(Airport::CONTRACT_FUEL, &self.contract_fuel)?
            .field(Airport::TRANSIENT_BUOY_STORAGE, &self.transient_buoy_storage)?
            .field(Airport::TRANSIENT_HANGAR_STORAGE, &self.transient_hangar_storage)?
            .field(Airport::TRANSIENT_TIE_DOWN_STORAGE, &self.transient_tie_down_storage)?
            .field(Airport::OTHER_SERVICES, &self.other_services)?
            .field(Airport::ICAO_ID, &self.icao_id)?
            .field(Airport::MINIMUM_OPERATIONAL_NETWORK, &self.minimum_operational_network)?
            .field(Airport::CUSTOMS_USER_FEE, &self.customs_user_fee)?
            .field(Airport::WIND_INDICATOR_FLAG, &self.wind_indicator_flag)?
            .field(Airport::ALTITUDE_CORRECTION_TEMPERATURE, &self.altitude_correction_temperature)?
            .edge(Airport::STATE, self.has_state, &self.has_state_with)?
            .edge(Airport::CITY, self.has_city, &self.has_city_with)?
            .edge(Airport::REGION, self.has_region, &self.has_region_with)?
            .build())
    }
}

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
#[graphql(name = "AirportOrderField")]
pub enum AirportOrderField {
    #[graphql(name = "AirportId")]
    AirportId,
    #[graphql(name = "IcaoId")]
    IcaoId,
    #[graphql(name = "SiteId")]
    SiteId,
    #[graphql(name = "Name")]
    Name,
    #[graphql(name = "FacilityType")]
    FacilityType,
    #[graphql(name = "Status")]
    Status,
    #[graphql(name = "Latitude")]
    Latitude,
    #[graphql(name = "Longitude")]
    Longitude,
    #[graphql(name = "Elevation")]
    Elevation,
    #[graphql(name = "ActivationDate")]
    ActivationDate,
    #[graphql(name = "BasedSingleEngine")]
    BasedSingleEngine,
    #[graphql(name = "CommercialOperations")]
    CommercialOperations,
    #[graphql(name = "CreatedAt")]
    CreatedAt,
    #[graphql(name = "UpdatedAt")]
    UpdatedAt,
}

impl SortField for AirportOrderField {
    fn column(&self) -> &'static str {
        match self {
            AirportOrderField::AirportId => "airport_id",
            AirportOrderField::IcaoId => "icao_id",
            AirportOrderField::SiteId => "site_id",
            AirportOrderField::Name => "name",
            AirportOrderField::FacilityType => "facility_type",
            AirportOrderField::Status => "status",
            AirportOrderField::Latitude => "latitude",
            AirportOrderField::Longitude => "longitude",
            AirportOrderField::Elevation => "elevation",
            AirportOrderField::ActivationDate => "activation_date",
            AirportOrderField::BasedSingleEngine => "based_single_engine",
            AirportOrderField::CommercialOperations => "commercial_operations",
            AirportOrderField::CreatedAt => "created_at",
            AirportOrderField::UpdatedAt => "updated_at",
        }
    }
}

pub type AirportOrder = Order<AirportOrderField>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::entities::fixtures;
    use crate::orm::predicate::dynamic::{self, Condition};
    use crate::orm::{not, or};
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    async fn codes(db: &Database, predicate: Predicate<Airport>) -> Vec<String> {
        EntityQuery::<Airport>::new()
            .filter(predicate)
            .default_order()
            .fetch_all(db.pool())
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.airport_id)
            .collect()
    }

    #[tokio::test]
    async fn test_has_state_with_equal_fold() {
        let db = fixtures::seeded().await;
        let predicate = Airport::STATE.has_with([State::NAME.equal_fold("illinois")]);
        assert_eq!(codes(&db, predicate).await, vec!["MDW", "ORD"]);
    }

    #[tokio::test]
    async fn test_multi_hop_edge() {
        let db = fixtures::seeded().await;
        // Airports in a city whose state has a city named Springfield
        let predicate = Airport::CITY.has_with([City::STATE.has_with([
            State::CITIES.has_with([City::NAME.eq("Springfield")]),
        ])]);
        assert_eq!(codes(&db, predicate).await, vec!["MDW", "ORD"]);
    }

    #[tokio::test]
    async fn test_missing_edges() {
        let db = fixtures::seeded().await;
        assert_eq!(codes(&db, not(Airport::STATE.has())).await, vec!["7IL9"]);
        assert_eq!(
            codes(&db, Airport::REGION.has()).await,
            codes(&db, Airport::REGION.has_with([])).await
        );
    }

    #[tokio::test]
    async fn test_negation_keeps_null_rows() {
        let db = fixtures::seeded().await;
        let outside_illinois = not(Airport::STATE.has_with([State::NAME.equal_fold("illinois")]));
        assert_eq!(codes(&db, outside_illinois).await, vec!["7IL9", "DEN"]);

        let atct = TowerType::AirTrafficControlTower;
        assert_eq!(codes(&db, not(Airport::TOWER_TYPE.eq(atct))).await, vec!["7IL9"]);
        assert_eq!(codes(&db, Airport::TOWER_TYPE.not_eq(atct)).await, vec!["7IL9"]);
        assert_eq!(codes(&db, Airport::TOWER_TYPE.not_in([atct])).await, vec!["7IL9"]);

        // Complements partition the table
        let in_region = Airport::REGION.has_with([Region::CODE.eq("AGL")]);
        let mut all = codes(&db, in_region.clone()).await;
        all.extend(codes(&db, not(in_region)).await);
        all.sort();
        assert_eq!(all, vec!["7IL9", "DEN", "MDW", "ORD"]);
    }

    #[test]
    fn test_invalid_enum_token_fails_before_execution() {
        let err = Airport::FACILITY_TYPE
            .eq_token("NOT_A_VALID_ENUM")
            .unwrap_err();
        assert_matches!(
            err,
            PredicateError::InvalidArgument { entity: "Airport", ref field, .. }
                if field == "facility_type"
        );
        assert!(Airport::FACILITY_TYPE.in_tokens(["HELIPORT", "BOGUS"]).is_err());
        assert_eq!(
            Airport::FACILITY_TYPE.eq_token("HELIPORT").unwrap(),
            Airport::FACILITY_TYPE.eq(FacilityType::Heliport)
        );
    }

    #[tokio::test]
    async fn test_enum_and_nullable_filters() {
        let db = fixtures::seeded().await;
        let heliports = Airport::FACILITY_TYPE.eq(FacilityType::Heliport);
        assert_eq!(codes(&db, heliports).await, vec!["7IL9"]);

        let towered = Airport::TOWER_TYPE.not_null();
        assert_eq!(codes(&db, towered).await, vec!["DEN", "MDW", "ORD"]);

        let big = or([
            Airport::ELEVATION.gt(5000.0),
            Airport::COMMERCIAL_OPERATIONS.gte(100_000),
        ]);
        assert_eq!(codes(&db, big).await, vec!["DEN", "ORD"]);
    }

    #[tokio::test]
    async fn test_where_input_matches_typed_predicate() {
        let db = fixtures::seeded().await;
        let input = AirportWhereInput {
            has_state_with: Some(vec![StateWhereInput {
                name: Some(StringFilter {
                    equal_fold: Some("ILLINOIS".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            }]),
            facility_type: Some(EnumFilter {
                eq: Some(FacilityType::Airport),
                ..Default::default()
            }),
            ..Default::default()
        };
        let predicate = input.to_predicate().unwrap();
        assert_eq!(codes(&db, predicate).await, vec!["MDW", "ORD"]);
    }

    #[tokio::test]
    async fn test_dynamic_conditions_execute() {
        let db = fixtures::seeded().await;
        let conditions: Vec<Condition> = serde_json::from_value(serde_json::json!([
            {"has": "region", "with": [{"field": "code", "op": "EQ", "value": "AGL"}]},
            {"field": "airport_id", "op": "NOT_IN", "value": ["MDW"]}
        ]))
        .unwrap();
        let predicate = dynamic::build::<Airport>(&conditions).unwrap();
        assert_eq!(codes(&db, predicate).await, vec!["ORD"]);
    }

    #[tokio::test]
    async fn test_inspection_and_service_columns() {
        use chrono::TimeZone;
        use crate::orm::repository;

        let db = fixtures::empty().await;
        let inspected = Utc.with_ymd_and_hms(2023, 5, 1, 0, 0, 0).unwrap();
        let airport = Airport {
            inspection_method: Some(InspectionMethod::PublicUseMailout),
            inspector_code: Some(InspectorCode::Owner),
            last_inspection: Some(inspected),
            bulk_oxygen_type: Some(OxygenType::HighLow),
            segmented_circle_marker: Some(SegmentedCircle::YesLighted),
            based_gliders: 4,
            transient_hangar_storage: true,
            ..fixtures::blank_airport("1C5")
        };
        repository::insert(db.pool(), &airport).await.unwrap();
        repository::insert(db.pool(), &fixtures::blank_airport("2C5")).await.unwrap();

        let stored: Airport = repository::get_by_id(db.pool(), &airport.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.inspection_method, Some(InspectionMethod::PublicUseMailout));
        assert_eq!(stored.last_inspection, Some(inspected));
        assert_eq!(stored.segmented_circle_marker, Some(SegmentedCircle::YesLighted));
        assert_eq!(stored.based_gliders, 4);
        assert!(stored.transient_hangar_storage);

        let mailout = Airport::INSPECTION_METHOD.eq_token("1").unwrap();
        assert_eq!(codes(&db, mailout).await, vec!["1C5"]);
        let no_oxygen = not(Airport::BULK_OXYGEN_TYPE.eq(OxygenType::HighLow));
        assert_eq!(codes(&db, no_oxygen).await, vec!["2C5"]);
    }

    #[test]
    fn test_code_lists() {
        assert_eq!(
            normalize_code_list("fuel_types", " 100LL, A ,100LL,,", FUEL_TYPES).unwrap(),
            "100LL,A"
        );
        assert_eq!(normalize_code_list("fuel_types", "", FUEL_TYPES).unwrap(), "");
        assert_matches!(
            normalize_code_list("other_services", "AMB,PIZZA", OTHER_SERVICES),
            Err(PredicateError::InvalidArgument { .. })
        );
    }
}
