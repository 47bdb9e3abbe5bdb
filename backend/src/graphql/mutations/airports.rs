use chrono::{DateTime, Utc};

use super::prelude::*;
use crate::graphql::entities::airport::{FUEL_TYPES, OTHER_SERVICES, normalize_code_list};
use crate::graphql::entities::enums::*;
use crate::orm::PredicateError;

#[derive(InputObject, Debug)]
#[graphql(name = "CreateAirportInput")]
pub struct CreateAirportInput {
    #[graphql(name = "SiteId")]
    pub site_id: String,
    #[graphql(name = "FacilityType")]
    pub facility_type: FacilityType,
    #[graphql(name = "AirportId")]
    pub airport_id: String,
    #[graphql(name = "AdoCode")]
    pub ado_code: Option<String>,
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
    #[graphql(name = "Elevation")]
    pub elevation: Option<f64>,
    #[graphql(name = "ElevationSurveyMethod")]
    pub elevation_survey_method: Option<SurveyMethod>,
    #[graphql(name = "MagneticVariance")]
    pub magnetic_variance: Option<i64>,
    #[graphql(name = "MagneticVarianceYear")]
    pub magnetic_variance_year: Option<i64>,
    #[graphql(name = "TrafficPatternAltitude")]
    pub traffic_pattern_altitude: Option<i64>,
    #[graphql(name = "ChartName")]
    pub chart_name: Option<String>,
    #[graphql(name = "DistanceToCity")]
    pub distance_to_city: Option<i64>,
    #[graphql(name = "DirectionToCity")]
    pub direction_to_city: Option<Direction>,
    #[graphql(name = "Acreage")]
    pub acreage: Option<i64>,
    #[graphql(name = "ArtccId")]
    pub artcc_id: Option<String>,
    #[graphql(name = "ArtccName")]
    pub artcc_name: Option<String>,
    #[graphql(name = "ComputerId")]
    pub computer_id: Option<String>,
    #[graphql(name = "FssOnAirport")]
    pub fss_on_airport: Option<bool>,
    #[graphql(name = "FssId")]
    pub fss_id: Option<String>,
    #[graphql(name = "FssName")]
    pub fss_name: Option<String>,
    #[graphql(name = "PhoneNumber")]
    pub phone_number: Option<String>,
    #[graphql(name = "TollFreeNumber")]
    pub toll_free_number: Option<String>,
    #[graphql(name = "AlternateFssId")]
    pub alternate_fss_id: Option<String>,
    #[graphql(name = "AlternateFssName")]
    pub alternate_fss_name: Option<String>,
    #[graphql(name = "AlternateTollFreeNumber")]
    pub alternate_toll_free_number: Option<String>,
    #[graphql(name = "NotamId")]
    pub notam_id: Option<String>,
    #[graphql(name = "NotamFlag")]
    pub notam_flag: Option<bool>,
    #[graphql(name = "ActivationDate")]
    pub activation_date: Option<DateTime<Utc>>,
    #[graphql(name = "Status")]
    pub status: OperationalStatus,
    #[graphql(name = "Far139Class")]
    pub far_139_class: Option<Far139Class>,
    #[graphql(name = "ArffIndex")]
    pub arff_index: Option<ArffIndex>,
    #[graphql(name = "ArffCertificationDate")]
    pub arff_certification_date: Option<DateTime<Utc>>,
    #[graphql(name = "Far139CarrierServiceCode")]
    pub far_139_carrier_service_code: Option<Far139CarrierService>,
    #[graphql(name = "AspCode")]
    pub asp_code: Option<String>,
    #[graphql(name = "AirspaceAnalysisDetermination")]
    pub airspace_analysis_determination: Option<AirspaceDetermination>,
    #[graphql(name = "CustomsAirportOfEntry")]
    pub customs_airport_of_entry: Option<bool>,
    #[graphql(name = "CustomsLandingRights")]
    pub customs_landing_rights: Option<bool>,
    #[graphql(name = "JointUse")]
    pub joint_use: Option<bool>,
    #[graphql(name = "MilitaryLandingRights")]
    pub military_landing_rights: Option<bool>,
    #[graphql(name = "InspectionMethod")]
    pub inspection_method: Option<InspectionMethod>,
    #[graphql(name = "InspectorCode")]
    pub inspector_code: Option<InspectorCode>,
    #[graphql(name = "LastInspection")]
    pub last_inspection: Option<DateTime<Utc>>,
    #[graphql(name = "LastInfoResponse")]
    pub last_info_response: Option<DateTime<Utc>>,
    /// Comma-separated fuel types available for public use (e.g. 100LL,A)
    #[graphql(name = "FuelTypes")]
    pub fuel_types: Option<String>,
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
    #[graphql(name = "LandingFee")]
    pub landing_fee: Option<bool>,
    #[graphql(name = "MedicalUse")]
    pub medical_use: Option<bool>,
    #[graphql(name = "BasedSingleEngine")]
    pub based_single_engine: Option<i64>,
    #[graphql(name = "BasedMultiEngineAircraft")]
    pub based_multi_engine_aircraft: Option<i64>,
    #[graphql(name = "BasedJetEngineAircraft")]
    pub based_jet_engine_aircraft: Option<i64>,
    #[graphql(name = "BasedHelicopters")]
    pub based_helicopters: Option<i64>,
    #[graphql(name = "BasedGliders")]
    pub based_gliders: Option<i64>,
    #[graphql(name = "BasedMilitaryAircraft")]
    pub based_military_aircraft: Option<i64>,
    #[graphql(name = "BasedUltralightAircraft")]
    pub based_ultralight_aircraft: Option<i64>,
    #[graphql(name = "CommercialOperations")]
    pub commercial_operations: Option<i64>,
    #[graphql(name = "CommuterOperations")]
    pub commuter_operations: Option<i64>,
    #[graphql(name = "AirTaxiOperations")]
    pub air_taxi_operations: Option<i64>,
    #[graphql(name = "GeneralAviationLocalOperations")]
    pub general_aviation_local_operations: Option<i64>,
    #[graphql(name = "GeneralAviationItinerantOperations")]
    pub general_aviation_itinerant_operations: Option<i64>,
    #[graphql(name = "MilitaryOperations")]
    pub military_operations: Option<i64>,
    #[graphql(name = "AnnualOperationsDate")]
    pub annual_operations_date: Option<DateTime<Utc>>,
    #[graphql(name = "AirportPositionSource")]
    pub airport_position_source: Option<String>,
    #[graphql(name = "AirportPositionSourceDate")]
    pub airport_position_source_date: Option<DateTime<Utc>>,
    #[graphql(name = "AirportElevationSource")]
    pub airport_elevation_source: Option<String>,
    #[graphql(name = "AirportElevationSourceDate")]
    pub airport_elevation_source_date: Option<DateTime<Utc>>,
    #[graphql(name = "ContractFuel")]
    pub contract_fuel: Option<bool>,
    #[graphql(name = "TransientBuoyStorage")]
    pub transient_buoy_storage: Option<bool>,
    #[graphql(name = "TransientHangarStorage")]
    pub transient_hangar_storage: Option<bool>,
    #[graphql(name = "TransientTieDownStorage")]
    pub transient_tie_down_storage: Option<bool>,
    /// Comma-separated list of other services (e.g. AMB,CHTR)
    #[graphql(name = "OtherServices")]
    pub other_services: Option<String>,
    #[graphql(name = "IcaoId")]
    pub icao_id: Option<String>,
    #[graphql(name = "MinimumOperationalNetwork")]
    pub minimum_operational_network: Option<bool>,
    #[graphql(name = "CustomsUserFee")]
    pub customs_user_fee: Option<bool>,
    #[graphql(name = "WindIndicatorFlag")]
    pub wind_indicator_flag: Option<WindIndicator>,
    #[graphql(name = "AltitudeCorrectionTemperature")]
    pub altitude_correction_temperature: Option<i64>,
    #[graphql(name = "StateId")]
    pub state_id: Option<String>,
    #[graphql(name = "CityId")]
    pub city_id: Option<String>,
    #[graphql(name = "RegionId")]
    pub region_id: Option<String>,
}

#[derive(InputObject, Debug, Default)]
#[graphql(name = "UpdateAirportInput")]
pub struct UpdateAirportInput {
    #[graphql(name = "SiteId")]
    pub site_id: Option<String>,
    #[graphql(name = "FacilityType")]
    pub facility_type: Option<FacilityType>,
    #[graphql(name = "AirportId")]
    pub airport_id: Option<String>,
    #[graphql(name = "AdoCode")]
    pub ado_code: Option<String>,
    #[graphql(name = "Name")]
    pub name: Option<String>,
    #[graphql(name = "OwnershipType")]
    pub ownership_type: Option<OwnershipType>,
    #[graphql(name = "Usage")]
    pub usage: Option<FacilityUse>,
    #[graphql(name = "Latitude")]
    pub latitude: Option<f64>,
    #[graphql(name = "Longitude")]
    pub longitude: Option<f64>,
    #[graphql(name = "LocationSurveyMethod")]
    pub location_survey_method: Option<SurveyMethod>,
    #[graphql(name = "ClearLocationSurveyMethod")]
    pub clear_location_survey_method: Option<bool>,
    #[graphql(name = "Elevation")]
    pub elevation: Option<f64>,
    #[graphql(name = "ElevationSurveyMethod")]
    pub elevation_survey_method: Option<SurveyMethod>,
    #[graphql(name = "ClearElevationSurveyMethod")]
    pub clear_elevation_survey_method: Option<bool>,
    #[graphql(name = "MagneticVariance")]
    pub magnetic_variance: Option<i64>,
    #[graphql(name = "MagneticVarianceYear")]
    pub magnetic_variance_year: Option<i64>,
    #[graphql(name = "ClearMagneticVarianceYear")]
    pub clear_magnetic_variance_year: Option<bool>,
    #[graphql(name = "TrafficPatternAltitude")]
    pub traffic_pattern_altitude: Option<i64>,
    #[graphql(name = "ChartName")]
    pub chart_name: Option<String>,
    #[graphql(name = "DistanceToCity")]
    pub distance_to_city: Option<i64>,
    #[graphql(name = "DirectionToCity")]
    pub direction_to_city: Option<Direction>,
    #[graphql(name = "ClearDirectionToCity")]
    pub clear_direction_to_city: Option<bool>,
    #[graphql(name = "Acreage")]
    pub acreage: Option<i64>,
    #[graphql(name = "ArtccId")]
    pub artcc_id: Option<String>,
    #[graphql(name = "ArtccName")]
    pub artcc_name: Option<String>,
    #[graphql(name = "ComputerId")]
    pub computer_id: Option<String>,
    #[graphql(name = "FssOnAirport")]
    pub fss_on_airport: Option<bool>,
    #[graphql(name = "FssId")]
    pub fss_id: Option<String>,
    #[graphql(name = "FssName")]
    pub fss_name: Option<String>,
    #[graphql(name = "PhoneNumber")]
    pub phone_number: Option<String>,
    #[graphql(name = "TollFreeNumber")]
    pub toll_free_number: Option<String>,
    #[graphql(name = "AlternateFssId")]
    pub alternate_fss_id: Option<String>,
    #[graphql(name = "AlternateFssName")]
    pub alternate_fss_name: Option<String>,
    #[graphql(name = "AlternateTollFreeNumber")]
    pub alternate_toll_free_number: Option<String>,
    #[graphql(name = "NotamId")]
    pub notam_id: Option<String>,
    #[graphql(name = "NotamFlag")]
    pub notam_flag: Option<bool>,
    #[graphql(name = "ActivationDate")]
    pub activation_date: Option<DateTime<Utc>>,
    #[graphql(name = "ClearActivationDate")]
    pub clear_activation_date: Option<bool>,
    #[graphql(name = "Status")]
    pub status: Option<OperationalStatus>,
    #[graphql(name = "Far139Class")]
    pub far_139_class: Option<Far139Class>,
    #[graphql(name = "ClearFar139Class")]
    pub clear_far_139_class: Option<bool>,
    #[graphql(name = "ArffIndex")]
    pub arff_index: Option<ArffIndex>,
    #[graphql(name = "ClearArffIndex")]
    pub clear_arff_index: Option<bool>,
    #[graphql(name = "ArffCertificationDate")]
    pub arff_certification_date: Option<DateTime<Utc>>,
    #[graphql(name = "ClearArffCertificationDate")]
    pub clear_arff_certification_date: Option<bool>,
    #[graphql(name = "Far139CarrierServiceCode")]
    pub far_139_carrier_service_code: Option<Far139CarrierService>,
    #[graphql(name = "ClearFar139CarrierServiceCode")]
    pub clear_far_139_carrier_service_code: Option<bool>,
    #[graphql(name = "AspCode")]
    pub asp_code: Option<String>,
    #[graphql(name = "AirspaceAnalysisDetermination")]
    pub airspace_analysis_determination: Option<AirspaceDetermination>,
    #[graphql(name = "ClearAirspaceAnalysisDetermination")]
    pub clear_airspace_analysis_determination: Option<bool>,
    #[graphql(name = "CustomsAirportOfEntry")]
    pub customs_airport_of_entry: Option<bool>,
    #[graphql(name = "CustomsLandingRights")]
    pub customs_landing_rights: Option<bool>,
    #[graphql(name = "JointUse")]
    pub joint_use: Option<bool>,
    #[graphql(name = "MilitaryLandingRights")]
    pub military_landing_rights: Option<bool>,
    #[graphql(name = "InspectionMethod")]
    pub inspection_method: Option<InspectionMethod>,
    #[graphql(name = "ClearInspectionMethod")]
    pub clear_inspection_method: Option<bool>,
    #[graphql(name = "InspectorCode")]
    pub inspector_code: Option<InspectorCode>,
    #[graphql(name = "ClearInspectorCode")]
    pub clear_inspector_code: Option<bool>,
    #[graphql(name = "LastInspection")]
    pub last_inspection: Option<DateTime<Utc>>,
    #[graphql(name = "ClearLastInspection")]
    pub clear_last_inspection: Option<bool>,
    #[graphql(name = "LastInfoResponse")]
    pub last_info_response: Option<DateTime<Utc>>,
    #[graphql(name = "ClearLastInfoResponse")]
    pub clear_last_info_response: Option<bool>,
    #[graphql(name = "FuelTypes")]
    pub fuel_types: Option<String>,
    #[graphql(name = "AirframeRepairService")]
    pub airframe_repair_service: Option<RepairService>,
    #[graphql(name = "ClearAirframeRepairService")]
    pub clear_airframe_repair_service: Option<bool>,
    #[graphql(name = "PowerPlantRepairService")]
    pub power_plant_repair_service: Option<RepairService>,
    #[graphql(name = "ClearPowerPlantRepairService")]
    pub clear_power_plant_repair_service: Option<bool>,
    #[graphql(name = "BottledOxygenType")]
    pub bottled_oxygen_type: Option<OxygenType>,
    #[graphql(name = "ClearBottledOxygenType")]
    pub clear_bottled_oxygen_type: Option<bool>,
    #[graphql(name = "BulkOxygenType")]
    pub bulk_oxygen_type: Option<OxygenType>,
    #[graphql(name = "ClearBulkOxygenType")]
    pub clear_bulk_oxygen_type: Option<bool>,
    #[graphql(name = "LightingSchedule")]
    pub lighting_schedule: Option<LightingSchedule>,
    #[graphql(name = "ClearLightingSchedule")]
    pub clear_lighting_schedule: Option<bool>,
    #[graphql(name = "BeaconLightingSchedule")]
    pub beacon_lighting_schedule: Option<LightingSchedule>,
    #[graphql(name = "ClearBeaconLightingSchedule")]
    pub clear_beacon_lighting_schedule: Option<bool>,
    #[graphql(name = "TowerType")]
    pub tower_type: Option<TowerType>,
    #[graphql(name = "ClearTowerType")]
    pub clear_tower_type: Option<bool>,
    #[graphql(name = "SegmentedCircleMarker")]
    pub segmented_circle_marker: Option<SegmentedCircle>,
    #[graphql(name = "ClearSegmentedCircleMarker")]
    pub clear_segmented_circle_marker: Option<bool>,
    #[graphql(name = "BeaconLensColor")]
    pub beacon_lens_color: Option<BeaconLensColor>,
    #[graphql(name = "ClearBeaconLensColor")]
    pub clear_beacon_lens_color: Option<bool>,
    #[graphql(name = "LandingFee")]
    pub landing_fee: Option<bool>,
    #[graphql(name = "MedicalUse")]
    pub medical_use: Option<bool>,
    #[graphql(name = "BasedSingleEngine")]
    pub based_single_engine: Option<i64>,
    #[graphql(name = "BasedMultiEngineAircraft")]
    pub based_multi_engine_aircraft: Option<i64>,
    #[graphql(name = "BasedJetEngineAircraft")]
    pub based_jet_engine_aircraft: Option<i64>,
    #[graphql(name = "BasedHelicopters")]
    pub based_helicopters: Option<i64>,
    #[graphql(name = "BasedGliders")]
    pub based_gliders: Option<i64>,
    #[graphql(name = "BasedMilitaryAircraft")]
    pub based_military_aircraft: Option<i64>,
    #[graphql(name = "BasedUltralightAircraft")]
    pub based_ultralight_aircraft: Option<i64>,
    #[graphql(name = "CommercialOperations")]
    pub commercial_operations: Option<i64>,
    #[graphql(name = "CommuterOperations")]
    pub commuter_operations: Option<i64>,
    #[graphql(name = "AirTaxiOperations")]
    pub air_taxi_operations: Option<i64>,
    #[graphql(name = "GeneralAviationLocalOperations")]
    pub general_aviation_local_operations: Option<i64>,
    #[graphql(name = "GeneralAviationItinerantOperations")]
    pub general_aviation_itinerant_operations: Option<i64>,
    #[graphql(name = "MilitaryOperations")]
    pub military_operations: Option<i64>,
    #[graphql(name = "AnnualOperationsDate")]
    pub annual_operations_date: Option<DateTime<Utc>>,
    #[graphql(name = "ClearAnnualOperationsDate")]
    pub clear_annual_operations_date: Option<bool>,
    #[graphql(name = "AirportPositionSource")]
    pub airport_position_source: Option<String>,
    #[graphql(name = "AirportPositionSourceDate")]
    pub airport_position_source_date: Option<DateTime<Utc>>,
    #[graphql(name = "ClearAirportPositionSourceDate")]
    pub clear_airport_position_source_date: Option<bool>,
    #[graphql(name = "AirportElevationSource")]
    pub airport_elevation_source: Option<String>,
    #[graphql(name = "AirportElevationSourceDate")]
    pub airport_elevation_source_date: Option<DateTime<Utc>>,
    #[graphql(name = "ClearAirportElevationSourceDate")]
    pub clear_airport_elevation_source_date: Option<bool>,
    #[graphql(name = "ContractFuel")]
    pub contract_fuel: Option<bool>,
    #[graphql(name = "TransientBuoyStorage")]
    pub transient_buoy_storage: Option<bool>,
    #[graphql(name = "TransientHangarStorage")]
    pub transient_hangar_storage: Option<bool>,
    #[graphql(name = "TransientTieDownStorage")]
    pub transient_tie_down_storage: Option<bool>,
    #[graphql(name = "OtherServices")]
    pub other_services: Option<String>,
    #[graphql(name = "IcaoId")]
    pub icao_id: Option<String>,
    #[graphql(name = "MinimumOperationalNetwork")]
    pub minimum_operational_network: Option<bool>,
    #[graphql(name = "CustomsUserFee")]
    pub customs_user_fee: Option<bool>,
    #[graphql(name = "WindIndicatorFlag")]
    pub wind_indicator_flag: Option<WindIndicator>,
    #[graphql(name = "ClearWindIndicatorFlag")]
    pub clear_wind_indicator_flag: Option<bool>,
    #[graphql(name = "AltitudeCorrectionTemperature")]
    pub altitude_correction_temperature: Option<i64>,
    #[graphql(name = "ClearAltitudeCorrectionTemperature")]
    pub clear_altitude_correction_temperature: Option<bool>,
    #[graphql(name = "StateId")]
    pub state_id: Option<String>,
    #[graphql(name = "ClearState")]
    pub clear_state: Option<bool>,
    #[graphql(name = "CityId")]
    pub city_id: Option<String>,
    #[graphql(name = "ClearCity")]
    pub clear_city: Option<bool>,
    #[graphql(name = "RegionId")]
    pub region_id: Option<String>,
    #[graphql(name = "ClearRegion")]
    pub clear_region: Option<bool>,
}

/// Counts are unsigned in the FAA record.
fn count(field: &'static str, value: i64) -> Result<i64, PredicateError> {
    if value < 0 {
        return Err(PredicateError::invalid(
            Airport::TYPE_NAME,
            field,
            "must not be negative",
        ));
    }
    Ok(value)
}

impl CreateAirportInput {
    /// Build the new row, filling omitted fields with blank values.
    fn into_airport(self) -> Result<Airport, PredicateError> {
        let now = now();
        Ok(Airport {
            id: new_id(),
            created_at: now,
            updated_at: now,
            site_id: self.site_id,
            facility_type: self.facility_type,
            airport_id: self.airport_id,
            ado_code: self.ado_code.unwrap_or_default(),
            name: self.name,
            ownership_type: self.ownership_type,
            usage: self.usage,
            latitude: self.latitude,
            longitude: self.longitude,
            location_survey_method: self.location_survey_method,
            elevation: self.elevation.unwrap_or_default(),
            elevation_survey_method: self.elevation_survey_method,
            magnetic_variance: self.magnetic_variance.unwrap_or_default(),
            magnetic_variance_year: self.magnetic_variance_year,
            traffic_pattern_altitude: self.traffic_pattern_altitude.unwrap_or_default(),
            chart_name: self.chart_name.unwrap_or_default(),
            distance_to_city: count("distance_to_city", self.distance_to_city.unwrap_or_default())?,
            direction_to_city: self.direction_to_city,
            acreage: count("acreage", self.acreage.unwrap_or_default())?,
            artcc_id: self.artcc_id.unwrap_or_default(),
            artcc_name: self.artcc_name.unwrap_or_default(),
            computer_id: self.computer_id.unwrap_or_default(),
            fss_on_airport: self.fss_on_airport.unwrap_or_default(),
            fss_id: self.fss_id.unwrap_or_default(),
            fss_name: self.fss_name.unwrap_or_default(),
            phone_number: self.phone_number.unwrap_or_default(),
            toll_free_number: self.toll_free_number.unwrap_or_default(),
            alternate_fss_id: self.alternate_fss_id.unwrap_or_default(),
            alternate_fss_name: self.alternate_fss_name.unwrap_or_default(),
            alternate_toll_free_number: self.alternate_toll_free_number.unwrap_or_default(),
            notam_id: self.notam_id.unwrap_or_default(),
            notam_flag: self.notam_flag.unwrap_or_default(),
            activation_date: self.activation_date,
            status: self.status,
            far_139_class: self.far_139_class,
            arff_index: self.arff_index,
            arff_certification_date: self.arff_certification_date,
            far_139_carrier_service_code: self.far_139_carrier_service_code,
            asp_code: self.asp_code.unwrap_or_default(),
            airspace_analysis_determination: self.airspace_analysis_determination,
            customs_airport_of_entry: self.customs_airport_of_entry.unwrap_or_default(),
            customs_landing_rights: self.customs_landing_rights.unwrap_or_default(),
            joint_use: self.joint_use.unwrap_or_default(),
            military_landing_rights: self.military_landing_rights.unwrap_or_default(),
            inspection_method: self.inspection_method,
            inspector_code: self.inspector_code,
            last_inspection: self.last_inspection,
            last_info_response: self.last_info_response,
            fuel_types: normalize_code_list(
                "fuel_types",
                self.fuel_types.as_deref().unwrap_or_default(),
                FUEL_TYPES,
            )?,
            airframe_repair_service: self.airframe_repair_service,
            power_plant_repair_service: self.power_plant_repair_service,
            bottled_oxygen_type: self.bottled_oxygen_type,
            bulk_oxygen_type: self.bulk_oxygen_type,
            lighting_schedule: self.lighting_schedule,
            beacon_lighting_schedule: self.beacon_lighting_schedule,
            tower_type: self.tower_type,
            segmented_circle_marker: self.segmented_circle_marker,
            beacon_lens_color: self.beacon_lens_color,
            landing_fee: self.landing_fee.unwrap_or_default(),
            medical_use: self.medical_use.unwrap_or_default(),
            based_single_engine: count(
                "based_single_engine",
                self.based_single_engine.unwrap_or_default(),
            )?,
            based_multi_engine_aircraft: count(
                "based_multi_engine_aircraft",
                self.based_multi_engine_aircraft.unwrap_or_default(),
            )?,
            based_jet_engine_aircraft: count(
                "based_jet_engine_aircraft",
                self.based_jet_engine_aircraft.unwrap_or_default(),
            )?,
            based_helicopters: count(
                "based_helicopters",
                self.based_helicopters.unwrap_or_default(),
            )?,
            based_gliders: count("based_gliders", self.based_gliders.unwrap_or_default())?,
            based_military_aircraft: count(
                "based_military_aircraft",
                self.based_military_aircraft.unwrap_or_default(),
            )?,
            based_ultralight_aircraft: count(
                "based_ultralight_aircraft",
                self.based_ultralight_aircraft.unwrap_or_default(),
            )?,
            commercial_operations: count(
                "commercial_operations",
                self.commercial_operations.unwrap_or_default(),
            )?,
            commuter_operations: count(
                "commuter_operations",
                self.commuter_operations.unwrap_or_default(),
            )?,
            air_taxi_operations: count(
                "air_taxi_operations",
                self.air_taxi_operations.unwrap_or_default(),
            )?,
            general_aviation_local_operations: count(
                "general_aviation_local_operations",
                self.general_aviation_local_operations.unwrap_or_default(),
            )?,
            general_aviation_itinerant_operations: count(
                "general_aviation_itinerant_operations",
                self.general_aviation_itinerant_operations.unwrap_or_default(),
            )?,
            military_operations: count(
                "military_operations",
                self.military_operations.unwrap_or_default(),
            )?,
            annual_operations_date: self.annual_operations_date,
            airport_position_source: self.airport_position_source.unwrap_or_default(),
            airport_position_source_date: self.airport_position_source_date,
            airport_elevation_source: self.airport_elevation_source.unwrap_or_default(),
            airport_elevation_source_date: self.airport_elevation_source_date,
            contract_fuel: self.contract_fuel.unwrap_or_default(),
            transient_buoy_storage: self.transient_buoy_storage.unwrap_or_default(),
            transient_hangar_storage: self.transient_hangar_storage.unwrap_or_default(),
            transient_tie_down_storage: self.transient_tie_down_storage.unwrap_or_default(),
            other_services: normalize_code_list(
                "other_services",
                self.other_services.as_deref().unwrap_or_default(),
                OTHER_SERVICES,
            )?,
            icao_id: self.icao_id.unwrap_or_default(),
            minimum_operational_network: self.minimum_operational_network.unwrap_or_default(),
            customs_user_fee: self.customs_user_fee.unwrap_or_default(),
            wind_indicator_flag: self.wind_indicator_flag,
            altitude_correction_temperature: self.altitude_correction_temperature,
            state_id: self.state_id,
            city_id: self.city_id,
            region_id: self.region_id,
        })
    }
}

impl UpdateAirportInput {
    /// Apply the supplied fields to `airport`.
    fn apply(self, airport: &mut Airport) -> Result<(), PredicateError> {
        if let Some(v) = self.site_id {
            airport.site_id = v;
        }
        if let Some(v) = self.facility_type {
            airport.facility_type = v;
        }
        if let Some(v) = self.airport_id {
            airport.airport_id = v;
        }
        if let Some(v) = self.ado_code {
            airport.ado_code = v;
        }
        if let Some(v) = self.name {
            airport.name = v;
        }
        if let Some(v) = self.ownership_type {
            airport.ownership_type = v;
        }
        if let Some(v) = self.usage {
            airport.usage = v;
        }
        if let Some(v) = self.latitude {
            airport.latitude = v;
        }
        if let Some(v) = self.longitude {
            airport.longitude = v;
        }
        set_nullable::<Airport, _>(
            &mut airport.location_survey_method,
            "location_survey_method",
            self.location_survey_method,
            self.clear_location_survey_method,
        )?;
        if let Some(v) = self.elevation {
            airport.elevation = v;
        }
        set_nullable::<Airport, _>(
            &mut airport.elevation_survey_method,
            "elevation_survey_method",
            self.elevation_survey_method,
            self.clear_elevation_survey_method,
        )?;
        if let Some(v) = self.magnetic_variance {
            airport.magnetic_variance = v;
        }
        set_nullable::<Airport, _>(
            &mut airport.magnetic_variance_year,
            "magnetic_variance_year",
            self.magnetic_variance_year,
            self.clear_magnetic_variance_year,
        )?;
        if let Some(v) = self.traffic_pattern_altitude {
            airport.traffic_pattern_altitude = v;
        }
        if let Some(v) = self.chart_name {
            airport.chart_name = v;
        }
        if let Some(v) = self.distance_to_city {
            airport.distance_to_city = count("distance_to_city", v)?;
        }
        set_nullable::<Airport, _>(
            &mut airport.direction_to_city,
            "direction_to_city",
            self.direction_to_city,
            self.clear_direction_to_city,
        )?;
        if let Some(v) = self.acreage {
            airport.acreage = count("acreage", v)?;
        }
        if let Some(v) = self.artcc_id {
            airport.artcc_id = v;
        }
        if let Some(v) = self.artcc_name {
            airport.artcc_name = v;
        }
        if let Some(v) = self.computer_id {
            airport.computer_id = v;
        }
        if let Some(v) = self.fss_on_airport {
            airport.fss_on_airport = v;
        }
        if let Some(v) = self.fss_id {
            airport.fss_id = v;
        }
        if let Some(v) = self.fss_name {
            airport.fss_name = v;
        }
        if let Some(v) = self.phone_number {
            airport.phone_number = v;
        }
        if let Some(v) = self.toll_free_number {
            airport.toll_free_number = v;
        }
        if let Some(v) = self.alternate_fss_id {
            airport.alternate_fss_id = v;
        }
        if let Some(v) = self.alternate_fss_name {
            airport.alternate_fss_name = v;
        }
        if let Some(v) = self.alternate_toll_free_number {
            airport.alternate_toll_free_number = v;
        }
        if let Some(v) = self.notam_id {
            airport.notam_id = v;
        }
        if let Some(v) = self.notam_flag {
            airport.notam_flag = v;
        }
        set_nullable::<Airport, _>(
            &mut airport.activation_date,
            "activation_date",
            self.activation_date,
            self.clear_activation_date,
        )?;
        if let Some(v) = self.status {
            airport.status = v;
        }
        set_nullable::<Airport, _>(
            &mut airport.far_139_class,
            "far_139_class",
            self.far_139_class,
            self.clear_far_139_class,
        )?;
        set_nullable::<Airport, _>(
            &mut airport.arff_index,
            "arff_index",
            self.arff_index,
            self.clear_arff_index,
        )?;
        set_nullable::<Airport, _>(
            &mut airport.arff_certification_date,
            "arff_certification_date",
            self.arff_certification_date,
            self.clear_arff_certification_date,
        )?;
        set_nullable::<Airport, _>(
            &mut airport.far_139_carrier_service_code,
            "far_139_carrier_service_code",
            self.far_139_carrier_service_code,
            self.clear_far_139_carrier_service_code,
        )?;
        if let Some(v) = self.asp_code {
            airport.asp_code = v;
        }
        set_nullable::<Airport, _>(
            &mut airport.airspace_analysis_determination,
            "airspace_analysis_determination",
            self.airspace_analysis_determination,
            self.clear_airspace_analysis_determination,
        )?;
        if let Some(v) = self.customs_airport_of_entry {
            airport.customs_airport_of_entry = v;
        }
        if let Some(v) = self.customs_landing_rights {
            airport.customs_landing_rights = v;
        }
        if let Some(v) = self.joint_use {
            airport.joint_use = v;
        }
        if let Some(v) = self.military_landing_rights {
            airport.military_landing_rights = v;
        }
        set_nullable::<Airport, _>(
            &mut airport.inspection_method,
            "inspection_method",
            self.inspection_method,
            self.clear_inspection_method,
        )?;
        set_nullable::<Airport, _>(
            &mut airport.inspector_code,
            "inspector_code",
            self.inspector_code,
            self.clear_inspector_code,
        )?;
        set_nullable::<Airport, _>(
            &mut airport.last_inspection,
            "last_inspection",
            self.last_inspection,
            self.clear_last_inspection,
        )?;
        set_nullable::<Airport, _>(
            &mut airport.last_info_response,
            "last_info_response",
            self.last_info_response,
            self.clear_last_info_response,
        )?;
        if let Some(v) = self.fuel_types {
            airport.fuel_types = normalize_code_list("fuel_types", &v, FUEL_TYPES)?;
        }
        set_nullable::<Airport, _>(
            &mut airport.airframe_repair_service,
            "airframe_repair_service",
            self.airframe_repair_service,
            self.clear_airframe_repair_service,
        )?;
        set_nullable::<Airport, _>(
            &mut airport.power_plant_repair_service,
            "power_plant_repair_service",
            self.power_plant_repair_service,
            self.clear_power_plant_repair_service,
        )?;
        set_nullable::<Airport, _>(
            &mut airport.bottled_oxygen_type,
            "bottled_oxygen_type",
            self.bottled_oxygen_type,
            self.clear_bottled_oxygen_type,
        )?;
        set_nullable::<Airport, _>(
            &mut airport.bulk_oxygen_type,
            "bulk_oxygen_type",
            self.bulk_oxygen_type,
            self.clear_bulk_oxygen_type,
        )?;
        set_nullable::<Airport, _>(
            &mut airport.lighting_schedule,
            "lighting_schedule",
            self.lighting_schedule,
            self.clear_lighting_schedule,
        )?;
        set_nullable::<Airport, _>(
            &mut airport.beacon_lighting_schedule,
            "beacon_lighting_schedule",
            self.beacon_lighting_schedule,
            self.clear_beacon_lighting_schedule,
        )?;
        set_nullable::<Airport, _>(
            &mut airport.tower_type,
            "tower_type",
            self.tower_type,
            self.clear_tower_type,
        )?;
        set_nullable::<Airport, _>(
            &mut airport.segmented_circle_marker,
            "segmented_circle_marker",
            self.segmented_circle_marker,
            self.clear_segmented_circle_marker,
        )?;
        set_nullable::<Airport, _>(
            &mut airport.beacon_lens_color,
            "beacon_lens_color",
            self.beacon_lens_color,
            self.clear_beacon_lens_color,
        )?;
        if let Some(v) = self.landing_fee {
            airport.landing_fee = v;
        }
        if let Some(v) = self.medical_use {
            airport.medical_use = v;
        }
        if let Some(v) = self.based_single_engine {
            airport.based_single_engine = count("based_single_engine", v)?;
        }
        if let Some(v) = self.based_multi_engine_aircraft {
            airport.based_multi_engine_aircraft = count("based_multi_engine_aircraft", v)?;
        }
        if let Some(v) = self.based_jet_engine_aircraft {
            airport.based_jet_engine_aircraft = count("based_jet_engine_aircraft", v)?;
        }
        if let Some(v) = self.based_helicopters {
            airport.based_helicopters = count("based_helicopters", v)?;
        }
        if let Some(v) = self.based_gliders {
            airport.based_gliders = count("based_gliders", v)?;
        }
        if let Some(v) = self.based_military_aircraft {
            airport.based_military_aircraft = count("based_military_aircraft", v)?;
        }
        if let Some(v) = self.based_ultralight_aircraft {
            airport.based_ultralight_aircraft = count("based_ultralight_aircraft", v)?;
        }
        if let Some(v) = self.commercial_operations {
            airport.commercial_operations = count("commercial_operations", v)?;
        }
        if let Some(v) = self.commuter_operations {
            airport.commuter_operations = count("commuter_operations", v)?;
        }
        if let Some(v) = self.air_taxi_operations {
            airport.air_taxi_operations = count("air_taxi_operations", v)?;
        }
        if let Some(v) = self.general_aviation_local_operations {
            airport.general_aviation_local_operations =
                count("general_aviation_local_operations", v)?;
        }
        if let Some(v) = self.general_aviation_itinerant_operations {
            airport.general_aviation_itinerant_operations =
                count("general_aviation_itinerant_operations", v)?;
        }
        if let Some(v) = self.military_operations {
            airport.military_operations = count("military_operations", v)?;
        }
        set_nullable::<Airport, _>(
            &mut airport.annual_operations_date,
            "annual_operations_date",
            self.annual_operations_date,
            self.clear_annual_operations_date,
        )?;
        if let Some(v) = self.airport_position_source {
            airport.airport_position_source = v;
        }
        set_nullable::<Airport, _>(
            &mut airport.airport_position_source_date,
            "airport_position_source_date",
            self.airport_position_source_date,
            self.clear_airport_position_source_date,
        )?;
        if let Some(v) = self.airport_elevation_source {
            airport.airport_elevation_source = v;
        }
        set_nullable::<Airport, _>(
            &mut airport.airport_elevation_source_date,
            "airport_elevation_source_date",
            self.airport_elevation_source_date,
            self.clear_airport_elevation_source_date,
        )?;
        if let Some(v) = self.contract_fuel {
            airport.contract_fuel = v;
        }
        if let Some(v) = self.transient_buoy_storage {
            airport.transient_buoy_storage = v;
        }
        if let Some(v) = self.transient_hangar_storage {
            airport.transient_hangar_storage = v;
        }
        if let Some(v) = self.transient_tie_down_storage {
            airport.transient_tie_down_storage = v;
        }
        if let Some(v) = self.other_services {
            airport.other_services = normalize_code_list("other_services", &v, OTHER_SERVICES)?;
        }
        if let Some(v) = self.icao_id {
            airport.icao_id = v;
        }
        if let Some(v) = self.minimum_operational_network {
            airport.minimum_operational_network = v;
        }
        if let Some(v) = self.customs_user_fee {
            airport.customs_user_fee = v;
        }
        set_nullable::<Airport, _>(
            &mut airport.wind_indicator_flag,
            "wind_indicator_flag",
            self.wind_indicator_flag,
            self.clear_wind_indicator_flag,
        )?;
        set_nullable::<Airport, _>(
            &mut airport.altitude_correction_temperature,
            "altitude_correction_temperature",
            self.altitude_correction_temperature,
            self.clear_altitude_correction_temperature,
        )?;
        set_nullable::<Airport, _>(
            &mut airport.state_id,
            "state_id",
            self.state_id,
            self.clear_state,
        )?;
        set_nullable::<Airport, _>(
            &mut airport.city_id,
            "city_id",
            self.city_id,
            self.clear_city,
        )?;
        set_nullable::<Airport, _>(
            &mut airport.region_id,
            "region_id",
            self.region_id,
            self.clear_region,
        )?;
        Ok(())
    }
}

async fn check_edges(tx: &mut sqlx::SqliteConnection, airport: &Airport) -> Result<()> {
    check_reference(&mut *tx, Airport::STATE, airport.state_id.as_deref())
        .await
        .gql()?;
    check_reference(&mut *tx, Airport::CITY, airport.city_id.as_deref())
        .await
        .gql()?;
    check_reference(&mut *tx, Airport::REGION, airport.region_id.as_deref())
        .await
        .gql()?;
    Ok(())
}

#[derive(Default)]
pub struct AirportMutations;

#[Object]
impl AirportMutations {
    #[graphql(name = "CreateAirport")]
    async fn create_airport(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "Input")] input: CreateAirportInput,
    ) -> Result<Airport> {
        let db = ctx.data_unchecked::<Database>();
        let airport = input.into_airport().gql()?;

        let mut tx = db.begin().await.gql()?;
        check_edges(&mut tx, &airport).await?;
        repository::insert(&mut *tx, &airport).await.gql()?;
        tx.commit().await.gql()?;

        tracing::info!(id = %airport.id, airport_id = %airport.airport_id, "Created airport");
        Ok(airport)
    }

    #[graphql(name = "UpdateAirport")]
    async fn update_airport(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "Id")] id: String,
        #[graphql(name = "Input")] input: UpdateAirportInput,
    ) -> Result<Airport> {
        let db = ctx.data_unchecked::<Database>();
        let mut tx = db.begin().await.gql()?;

        let mut airport = require::<Airport, _>(&mut *tx, &id).await.gql()?;
        input.apply(&mut airport).gql()?;
        check_edges(&mut tx, &airport).await?;
        repository::update_by_id(&mut *tx, &id, &airport).await.gql()?;

        let airport = require::<Airport, _>(&mut *tx, &id).await.gql()?;
        tx.commit().await.gql()?;
        Ok(airport)
    }

    /// Returns the deleted ID
    #[graphql(name = "DeleteAirport")]
    async fn delete_airport(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "Id")] id: String,
    ) -> Result<String> {
        let db = ctx.data_unchecked::<Database>();
        delete_entity::<Airport>(db, &id).await.gql()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    fn create_input() -> CreateAirportInput {
        CreateAirportInput {
            site_id: "04508.*A".to_string(),
            facility_type: FacilityType::Airport,
            airport_id: "ORD".to_string(),
            ado_code: None,
            name: "Chicago O'Hare Intl".to_string(),
            ownership_type: OwnershipType::Public,
            usage: FacilityUse::Public,
            latitude: 41.9786,
            longitude: -87.9048,
            location_survey_method: None,
            elevation: None,
            elevation_survey_method: None,
            magnetic_variance: None,
            magnetic_variance_year: None,
            traffic_pattern_altitude: None,
            chart_name: None,
            distance_to_city: None,
            direction_to_city: None,
            acreage: None,
            artcc_id: None,
            artcc_name: None,
            computer_id: None,
            fss_on_airport: None,
            fss_id: None,
            fss_name: None,
            phone_number: None,
            toll_free_number: None,
            alternate_fss_id: None,
            alternate_fss_name: None,
            alternate_toll_free_number: None,
            notam_id: None,
            notam_flag: None,
            activation_date: None,
            status: OperationalStatus::Operational,
            far_139_class: None,
            arff_index: None,
            arff_certification_date: None,
            far_139_carrier_service_code: None,
            asp_code: None,
            airspace_analysis_determination: None,
            customs_airport_of_entry: None,
            customs_landing_rights: None,
            joint_use: None,
            military_landing_rights: None,
            inspection_method: None,
            inspector_code: None,
            last_inspection: None,
            last_info_response: None,
            fuel_types: Some(" A, 100LL,,A ".to_string()),
            airframe_repair_service: None,
            power_plant_repair_service: None,
            bottled_oxygen_type: None,
            bulk_oxygen_type: None,
            lighting_schedule: None,
            beacon_lighting_schedule: None,
            tower_type: None,
            segmented_circle_marker: None,
            beacon_lens_color: None,
            landing_fee: None,
            medical_use: None,
            based_single_engine: None,
            based_multi_engine_aircraft: None,
            based_jet_engine_aircraft: None,
            based_helicopters: None,
            based_gliders: None,
            based_military_aircraft: None,
            based_ultralight_aircraft: None,
            commercial_operations: None,
            commuter_operations: None,
            air_taxi_operations: None,
            general_aviation_local_operations: None,
            general_aviation_itinerant_operations: None,
            military_operations: None,
            annual_operations_date: None,
            airport_position_source: None,
            airport_position_source_date: None,
            airport_elevation_source: None,
            airport_elevation_source_date: None,
            contract_fuel: None,
            transient_buoy_storage: None,
            transient_hangar_storage: None,
            transient_tie_down_storage: None,
            other_services: None,
            icao_id: None,
            minimum_operational_network: None,
            customs_user_fee: None,
            wind_indicator_flag: None,
            altitude_correction_temperature: None,
            state_id: None,
            city_id: None,
            region_id: None,
        }
    }

    #[test]
    fn test_create_fills_blanks_and_normalizes_codes() {
        let airport = create_input().into_airport().unwrap();
        assert_eq!(airport.fuel_types, "A,100LL");
        assert_eq!(airport.other_services, "");
        assert_eq!(airport.elevation, 0.0);
        assert_eq!(airport.tower_type, None);
        assert!(!airport.landing_fee);
    }

    #[test]
    fn test_create_rejects_unknown_fuel() {
        let input = CreateAirportInput {
            fuel_types: Some("100LL,DIESEL".to_string()),
            ..create_input()
        };
        assert_matches!(
            input.into_airport(),
            Err(PredicateError::InvalidArgument { ref field, .. }) if field == "fuel_types"
        );
    }

    #[test]
    fn test_update_sets_and_clears() {
        let mut airport = create_input().into_airport().unwrap();
        airport.tower_type = Some(TowerType::AirTrafficControlTower);

        UpdateAirportInput {
            elevation: Some(672.0),
            clear_tower_type: Some(true),
            other_services: Some("CARGO,AMB".to_string()),
            ..Default::default()
        }
        .apply(&mut airport)
        .unwrap();

        assert_eq!(airport.elevation, 672.0);
        assert_eq!(airport.tower_type, None);
        assert_eq!(airport.other_services, "CARGO,AMB");
        assert_eq!(airport.airport_id, "ORD");
    }

    #[test]
    fn test_counts_must_not_be_negative() {
        let input = CreateAirportInput {
            based_gliders: Some(-1),
            ..create_input()
        };
        assert_matches!(
            input.into_airport(),
            Err(PredicateError::InvalidArgument { ref field, .. }) if field == "based_gliders"
        );

        let mut airport = create_input().into_airport().unwrap();
        let result = UpdateAirportInput {
            commercial_operations: Some(-5),
            ..Default::default()
        }
        .apply(&mut airport);
        assert_matches!(
            result,
            Err(PredicateError::InvalidArgument { ref field, .. })
                if field == "commercial_operations"
        );
        assert_eq!(airport.commercial_operations, 0);

        UpdateAirportInput {
            air_taxi_operations: Some(1200),
            magnetic_variance: Some(-3),
            ..Default::default()
        }
        .apply(&mut airport)
        .unwrap();
        assert_eq!(airport.air_taxi_operations, 1200);
        assert_eq!(airport.magnetic_variance, -3);
    }

    #[test]
    fn test_update_rejects_set_and_clear() {
        let mut airport = create_input().into_airport().unwrap();
        let result = UpdateAirportInput {
            region_id: Some("r1".to_string()),
            clear_region: Some(true),
            ..Default::default()
        }
        .apply(&mut airport);
        assert_matches!(result, Err(PredicateError::InvalidArgument { entity: "Airport", .. }));
    }
}
