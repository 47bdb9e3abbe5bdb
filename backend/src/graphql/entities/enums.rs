//! Enumerated airport attributes
//!
//! The GraphQL value names are the stored tokens, so `"SEAPLANE_BASE"` in the
//! database reads back as `SEAPLANE_BASE` in the API.

use serde::{Deserialize, Serialize};

use crate::orm::FieldEnum;

macro_rules! field_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $token:tt),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(async_graphql::Enum, Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[graphql(name = $token)]
                #[serde(rename = $token)]
                $variant,
            )+
        }

        impl FieldEnum for $name {
            const TOKENS: &'static [&'static str] = &[$($token),+];

            fn token(&self) -> &'static str {
                match self {
                    $($name::$variant => $token,)+
                }
            }

            fn from_token(token: &str) -> Option<Self> {
                match token {
                    $($token => Some($name::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

field_enum! {
    /// Kind of landing facility
    FacilityType {
        Airport => "AIRPORT",
        Balloonport => "BALLOONPORT",
        SeaplaneBase => "SEAPLANE_BASE",
        Gliderport => "GLIDERPORT",
        Heliport => "HELIPORT",
        Ultralight => "ULTRALIGHT",
    }
}

field_enum! {
    OwnershipType {
        Public => "PU",
        Private => "PR",
        MilitaryArmy => "MR",
        MilitaryAirForce => "MA",
        MilitaryNavy => "MN",
        MilitaryCoastGuard => "CG",
    }
}

field_enum! {
    /// Public or private use
    FacilityUse {
        Public => "PU",
        Private => "PR",
    }
}

field_enum! {
    SurveyMethod {
        Estimated => "E",
        Surveyed => "S",
    }
}

field_enum! {
    /// Sixteen-point compass direction from the associated city
    Direction {
        North => "N",
        NorthNortheast => "NNE",
        Northeast => "NE",
        EastNortheast => "ENE",
        East => "E",
        EastSoutheast => "ESE",
        Southeast => "SE",
        SouthSoutheast => "SSE",
        South => "S",
        SouthSouthwest => "SSW",
        Southwest => "SW",
        WestSouthwest => "WSW",
        West => "W",
        WestNorthwest => "WNW",
        Northwest => "NW",
        NorthNorthwest => "NNW",
    }
}

field_enum! {
    OperationalStatus {
        Operational => "O",
        ClosedIndefinitely => "CI",
        ClosedPermanently => "CP",
    }
}

field_enum! {
    /// FAR 139 airport class code
    Far139Class {
        I => "I",
        II => "II",
        III => "III",
        IV => "IV",
    }
}

field_enum! {
    /// ARFF certification index
    ArffIndex {
        A => "A",
        B => "B",
        C => "C",
        D => "D",
        E => "E",
        L => "L",
    }
}

field_enum! {
    TowerType {
        AirTrafficControlTower => "ATCT",
        NonAirTrafficControlTower => "NON_ATCT",
        WithApproachControl => "ATCT_AC",
        WithRadarApproachControl => "ATCT_RAPCON",
        WithRadarApproachControlFacility => "ATCT_RATCF",
        WithTerminalRadarApproachControl => "ATCT_TRACON",
    }
}

field_enum! {
    BeaconLensColor {
        WhiteGreen => "WG",
        WhiteYellow => "WY",
        WhiteGreenYellow => "WGY",
        SplitWhiteGreen => "SWG",
        White => "W",
        Yellow => "Y",
        Green => "G",
        NoBeacon => "N",
    }
}

field_enum! {
    WindIndicator {
        NoWindIndicator => "NO_WIND_INDICATOR",
        Unlighted => "UNLIGHTED",
        Lighted => "LIGHTED",
    }
}

field_enum! {
    /// Scheduled or unscheduled FAR 139 carrier service
    Far139CarrierService {
        Scheduled => "S",
        Unscheduled => "U",
    }
}

field_enum! {
    AirspaceDetermination {
        Conditional => "CONDITIONAL",
        NotAnalyzed => "NOT_ANALYZED",
        NoObjection => "NO_OBJECTION",
        Objectionable => "OBJECTIONABLE",
    }
}

/// How the last physical inspection was carried out.
///
/// The mail-out programs are stored as `1` and `2`, which are not valid
/// GraphQL names, so this enum is written out instead of using `field_enum!`.
#[derive(async_graphql::Enum, Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum InspectionMethod {
    #[graphql(name = "F")]
    #[serde(rename = "F")]
    Federal,
    #[graphql(name = "S")]
    #[serde(rename = "S")]
    State,
    #[graphql(name = "C")]
    #[serde(rename = "C")]
    Contractor,
    #[graphql(name = "PUBLIC_USE_MAILOUT")]
    #[serde(rename = "1")]
    PublicUseMailout,
    #[graphql(name = "PRIVATE_USE_MAILOUT")]
    #[serde(rename = "2")]
    PrivateUseMailout,
}

impl FieldEnum for InspectionMethod {
    const TOKENS: &'static [&'static str] = &["F", "S", "C", "1", "2"];

    fn token(&self) -> &'static str {
        match self {
            InspectionMethod::Federal => "F",
            InspectionMethod::State => "S",
            InspectionMethod::Contractor => "C",
            InspectionMethod::PublicUseMailout => "1",
            InspectionMethod::PrivateUseMailout => "2",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "F" => Some(InspectionMethod::Federal),
            "S" => Some(InspectionMethod::State),
            "C" => Some(InspectionMethod::Contractor),
            "1" => Some(InspectionMethod::PublicUseMailout),
            "2" => Some(InspectionMethod::PrivateUseMailout),
            _ => None,
        }
    }
}

field_enum! {
    /// Agency performing the physical inspection
    InspectorCode {
        FaaFieldPersonnel => "F",
        StateAeronauticalPersonnel => "S",
        PrivateContractPersonnel => "C",
        Owner => "N",
    }
}

field_enum! {
    /// Airframe or power plant repair available on the field
    RepairService {
        Major => "MAJOR",
        Minor => "MINOR",
        NoRepair => "NONE",
    }
}

field_enum! {
    OxygenType {
        High => "HIGH",
        Low => "LOW",
        HighLow => "HIGH_LOW",
        NoOxygen => "NONE",
    }
}

field_enum! {
    /// Field or beacon lighting schedule
    LightingSchedule {
        SeeRemark => "SEE_RMK",
        SunsetSunrise => "SUNSET_SUNRISE",
    }
}

field_enum! {
    SegmentedCircle {
        Yes => "Y",
        No => "N",
        YesLighted => "Y_L",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        for token in Direction::TOKENS {
            let value = Direction::from_token(token).unwrap();
            assert_eq!(value.token(), *token);
        }
        assert_eq!(FacilityType::from_token("NOT_A_VALID_ENUM"), None);
        assert_eq!(FacilityType::TOKENS.len(), 6);
    }

    #[test]
    fn test_inspection_method_tokens() {
        let mailout = InspectionMethod::from_token("1").unwrap();
        assert_eq!(mailout, InspectionMethod::PublicUseMailout);
        assert_eq!(mailout.token(), "1");
        assert_eq!(serde_json::to_string(&mailout).unwrap(), "\"1\"");
        assert_eq!(InspectionMethod::from_token("3"), None);
    }

    #[test]
    fn test_serde_uses_tokens() {
        let json = serde_json::to_string(&TowerType::WithApproachControl).unwrap();
        assert_eq!(json, "\"ATCT_AC\"");
    }
}
