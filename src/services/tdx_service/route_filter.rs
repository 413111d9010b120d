use super::types::{
    tdx_estimated_time_of_arrival_response::EstimatedTimeOfArrival, tdx_name_type::NameType,
    tdx_stop_of_route_response::StopOfRoute,
};

/// Rows that carry a route and sub-route name.
pub trait NamedRouteRow {
    fn route_name(&self) -> Option<&NameType>;
    fn sub_route_name(&self) -> Option<&NameType>;
}

impl NamedRouteRow for EstimatedTimeOfArrival {
    fn route_name(&self) -> Option<&NameType> {
        self.RouteName.as_ref()
    }

    fn sub_route_name(&self) -> Option<&NameType> {
        self.SubRouteName.as_ref()
    }
}

impl NamedRouteRow for StopOfRoute {
    fn route_name(&self) -> Option<&NameType> {
        self.RouteName.as_ref()
    }

    fn sub_route_name(&self) -> Option<&NameType> {
        self.SubRouteName.as_ref()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Exact match, or a prefix match whose suffix is not a "區" short-turn variant.
fn name_matches(name: Option<&str>, target: &str) -> bool {
    let Some(name) = name.filter(|n| !n.is_empty()) else {
        return false;
    };

    let name = normalize(name);
    match name.strip_prefix(target) {
        Some("") => true,
        Some(suffix) => !suffix.starts_with('區'),
        None => false,
    }
}

/// TDX matches the route segment as a prefix ("30" also returns "307"), so
/// rows are narrowed to the requested route here.
pub fn filter_by_route<T: NamedRouteRow>(rows: Vec<T>, route: &str) -> Vec<T> {
    let target = normalize(route);

    rows.into_iter()
        .filter(|row| {
            [row.route_name(), row.sub_route_name()]
                .into_iter()
                .flatten()
                .any(|n| {
                    name_matches(n.Zh_tw.as_deref(), &target)
                        || name_matches(n.En.as_deref(), &target)
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(route: &str, sub_route: Option<&str>) -> StopOfRoute {
        StopOfRoute {
            RouteName: Some(NameType {
                Zh_tw: Some(route.to_string()),
                En: Some(route.to_string()),
            }),
            SubRouteName: sub_route.map(|s| NameType {
                Zh_tw: Some(s.to_string()),
                En: None,
            }),
            ..Default::default()
        }
    }

    fn names(rows: &[StopOfRoute]) -> Vec<String> {
        rows.iter()
            .filter_map(|r| r.RouteName.as_ref().and_then(|n| n.Zh_tw.clone()))
            .collect()
    }

    #[test]
    fn keeps_exact_match() {
        let rows = vec![row("307", None), row("30", None)];
        assert_eq!(names(&filter_by_route(rows, "307")), vec!["307"]);
    }

    #[test]
    fn keeps_prefix_variants_but_not_short_turns() {
        let rows = vec![row("208", None), row("208區", None), row("208直達車", None)];
        assert_eq!(
            names(&filter_by_route(rows, "208")),
            vec!["208", "208直達車"]
        );
    }

    #[test]
    fn matches_case_insensitively_and_on_sub_route() {
        let rows = vec![row("Blue 1", None), row("藍1", Some("blue 1"))];
        assert_eq!(filter_by_route(rows, " BLUE 1 ").len(), 2);
    }

    #[test]
    fn drops_rows_without_names() {
        let rows = vec![StopOfRoute::default()];
        assert!(filter_by_route(rows, "307").is_empty());
    }
}
