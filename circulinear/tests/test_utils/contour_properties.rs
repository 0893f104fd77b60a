use circulinear::{
    core::traits::FuzzyEq,
    curve::{ClosedOriented, ContinuousCurve, Contour},
    AABB,
};

/// Fuzzy compare AABB values
pub fn aabb_fuzzy_eq_eps(a: &AABB<f64>, b: &AABB<f64>, eps: f64) -> bool {
    a.min_x.fuzzy_eq_eps(b.min_x, eps)
        && a.min_y.fuzzy_eq_eps(b.min_y, eps)
        && a.max_x.fuzzy_eq_eps(b.max_x, eps)
        && a.max_y.fuzzy_eq_eps(b.max_y, eps)
}

/// Holds a set of properties of a bounded contour for comparison in tests
#[derive(Debug, Copy, Clone)]
pub struct ContourProperties {
    pub element_count: usize,
    pub area: f64,
    pub length: f64,
    pub extents: AABB<f64>,
}

impl ContourProperties {
    // positions equal epsilon
    pub const POS_EQ_EPS: f64 = 1e-5;
    // property comparer epsilon
    pub const PROP_CMP_EPS: f64 = 1e-4;

    pub fn new(
        element_count: usize,
        area: f64,
        length: f64,
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    ) -> Self {
        Self {
            element_count,
            area,
            length,
            extents: AABB::new(min_x, min_y, max_x, max_y),
        }
    }

    pub fn from_curve(curve: &ContinuousCurve<f64>, invert_area: bool) -> Self {
        let area = if invert_area {
            -curve.signed_area()
        } else {
            curve.signed_area()
        };

        Self {
            element_count: curve.element_count(),
            area,
            length: curve.length(),
            extents: curve.bounding_box().unwrap(),
        }
    }

    pub fn from_contour(contour: &Contour<f64>) -> Self {
        Self::from_curve(contour.curve(), false)
    }

    pub fn fuzzy_eq_eps(&self, other: &Self, eps: f64) -> bool {
        self.element_count == other.element_count
            && self.area.fuzzy_eq_eps(other.area, eps)
            && self.length.fuzzy_eq_eps(other.length, eps)
            && aabb_fuzzy_eq_eps(&self.extents, &other.extents, eps)
    }
}

pub fn create_property_set<'a, I>(contours: I) -> Vec<ContourProperties>
where
    I: IntoIterator<Item = &'a Contour<f64>>,
{
    contours
        .into_iter()
        .map(ContourProperties::from_contour)
        .collect()
}

pub fn property_sets_match(
    result_set: &[ContourProperties],
    expected_set: &[ContourProperties],
) -> bool {
    let mut sets_match = true;
    if result_set.len() != expected_set.len() {
        sets_match = false;
    } else {
        // simple N^2 comparison, result sets are small
        for properties_expected in expected_set {
            let match_count = result_set
                .iter()
                .filter(|properties_result| {
                    properties_expected
                        .fuzzy_eq_eps(properties_result, ContourProperties::PROP_CMP_EPS)
                })
                .count();

            if match_count != 1 {
                sets_match = false;
                break;
            }
        }
    }

    if !sets_match {
        eprintln!("result:\n{:?}", result_set);
        eprintln!("expected:\n{:?}", expected_set);
    }

    sets_match
}
