use serde::Deserialize;
use validator::{Validate, ValidationError};

use super::city::City;

fn validate_route_name(route: &str) -> Result<(), ValidationError> {
    if route.trim().is_empty() {
        return Err(ValidationError::new("blank_route")
            .with_message("Route must not be blank".into()));
    }

    Ok(())
}

fn validate_city(city: &str) -> Result<(), ValidationError> {
    city.parse::<City>().map(|_| ()).map_err(|e| {
        ValidationError::new("unknown_city").with_message(e.to_string().into())
    })
}

#[derive(Validate, Deserialize)]
pub struct RoutePath {
    #[validate(
        length(min = 1, message = "Must be at least 1 character"),
        custom(function = "validate_route_name")
    )]
    pub route: String,
}

impl RoutePath {
    pub fn name(&self) -> &str {
        self.route.trim()
    }
}

#[derive(Validate, Deserialize)]
pub struct CityQuery {
    #[validate(custom(function = "validate_city"))]
    pub city: Option<String>,
}

impl CityQuery {
    /// The requested city, or `default` when the query omits it.
    pub fn resolve(&self, default: City) -> City {
        self.city
            .as_deref()
            .and_then(|c| c.parse().ok())
            .unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_route() {
        let path = RoutePath {
            route: "   ".to_string(),
        };
        assert!(path.validate().is_err());

        let path = RoutePath {
            route: " 307 ".to_string(),
        };
        assert!(path.validate().is_ok());
        assert_eq!(path.name(), "307");
    }

    #[test]
    fn accepts_long_route_names() {
        let path = RoutePath {
            route: "紅".repeat(40) + &"9".repeat(40),
        };
        assert!(path.validate().is_ok());
    }

    #[test]
    fn rejects_unknown_city() {
        let query = CityQuery {
            city: Some("Mars".to_string()),
        };
        let err = query.validate().unwrap_err();
        assert!(err.to_string().contains("Unknown city: Mars"));
    }

    #[test]
    fn resolves_default_city() {
        let query = CityQuery { city: None };
        assert!(query.validate().is_ok());
        assert_eq!(query.resolve(City::Tainan), City::Tainan);

        let query = CityQuery {
            city: Some("kaohsiung".to_string()),
        };
        assert_eq!(query.resolve(City::Tainan), City::Kaohsiung);
    }
}
