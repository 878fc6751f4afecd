//! Supported destination cities
//!
//! The destination set is closed: every supported city carries fixed
//! coordinates and an introduction text, so lookups never fail.

use crate::models::Location;
use std::fmt;
use std::str::FromStr;

/// A supported destination city
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Seoul,
    Busan,
    Jeju,
    Tokyo,
    Osaka,
    Paris,
}

impl City {
    /// All supported cities, in menu order
    pub const ALL: [City; 6] = [
        City::Seoul,
        City::Busan,
        City::Jeju,
        City::Tokyo,
        City::Osaka,
        City::Paris,
    ];

    /// Display name of the city
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            City::Seoul => "서울",
            City::Busan => "부산",
            City::Jeju => "제주",
            City::Tokyo => "도쿄",
            City::Osaka => "오사카",
            City::Paris => "파리",
        }
    }

    /// City coordinates as (latitude, longitude) in decimal degrees
    #[must_use]
    pub fn coordinates(self) -> (f64, f64) {
        match self {
            City::Seoul => (37.5665, 126.9780),
            City::Busan => (35.1796, 129.0756),
            City::Jeju => (33.4996, 126.5312),
            City::Tokyo => (35.6895, 139.6917),
            City::Osaka => (34.6937, 135.5023),
            City::Paris => (48.8566, 2.3522),
        }
    }

    /// Static introduction text for the city
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            City::Seoul => {
                "서울은 대한민국의 수도로, 역사와 현대가 공존하는 도시입니다. 경복궁, 남산타워, 한강공원 등 다양한 관광지가 있으며, 맛집과 쇼핑, 문화 체험을 모두 즐길 수 있습니다."
            }
            City::Busan => {
                "부산은 한국의 대표 항구 도시로, 해운대, 광안리, 자갈치 시장 등 아름다운 해변과 활기찬 시장을 즐길 수 있습니다."
            }
            City::Jeju => {
                "제주는 한국의 대표 관광 섬으로, 아름다운 자연경관과 한라산, 용두암, 성산일출봉 등 다양한 명소가 있습니다."
            }
            City::Tokyo => {
                "도쿄는 일본의 수도로, 현대적인 도시와 전통 문화가 공존하며, 쇼핑, 음식, 관광 명소가 풍부합니다."
            }
            City::Osaka => {
                "오사카는 일본의 상업 중심지로, 오사카성, 도톤보리, 유니버설 스튜디오 등 다양한 즐길거리가 있는 도시입니다."
            }
            City::Paris => {
                "파리는 프랑스의 수도로, 에펠탑, 루브르 박물관, 샹젤리제 거리 등 세계적인 관광명소와 예술 문화를 즐길 수 있는 도시입니다."
            }
        }
    }

    /// Location of the city, suitable for weather lookups and map markers
    #[must_use]
    pub fn location(self) -> Location {
        let (latitude, longitude) = self.coordinates();
        Location::new(latitude, longitude, self.name().to_string())
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for City {
    type Err = crate::WayfarerError;

    /// Parse a city from its Korean name or an ASCII alias
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "서울" | "seoul" => Ok(City::Seoul),
            "부산" | "busan" => Ok(City::Busan),
            "제주" | "jeju" => Ok(City::Jeju),
            "도쿄" | "tokyo" => Ok(City::Tokyo),
            "오사카" | "osaka" => Ok(City::Osaka),
            "파리" | "paris" => Ok(City::Paris),
            other => Err(crate::WayfarerError::validation(format!(
                "Unknown city '{other}'. Supported: {}",
                City::ALL.map(City::name).join(", ")
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(City::Seoul)]
    #[case(City::Busan)]
    #[case(City::Jeju)]
    #[case(City::Tokyo)]
    #[case(City::Osaka)]
    #[case(City::Paris)]
    fn test_city_has_valid_coordinates_and_description(#[case] city: City) {
        let (lat, lon) = city.coordinates();
        assert!((-90.0..=90.0).contains(&lat), "latitude out of range for {city}");
        assert!((-180.0..=180.0).contains(&lon), "longitude out of range for {city}");
        assert!(!city.description().is_empty());
        assert!(!city.name().is_empty());
    }

    #[test]
    fn test_city_parsing_accepts_korean_and_ascii() {
        assert_eq!("서울".parse::<City>().unwrap(), City::Seoul);
        assert_eq!("seoul".parse::<City>().unwrap(), City::Seoul);
        assert_eq!("Paris".parse::<City>().unwrap(), City::Paris);
        assert_eq!(" busan ".parse::<City>().unwrap(), City::Busan);
    }

    #[test]
    fn test_unknown_city_is_rejected() {
        let err = "Atlantis".parse::<City>().unwrap_err();
        assert!(err.to_string().contains("Unknown city"));
    }

    #[test]
    fn test_location_carries_city_name() {
        let location = City::Jeju.location();
        assert_eq!(location.name, "제주");
        assert_eq!(location.latitude, 33.4996);
    }
}
