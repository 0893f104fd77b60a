use circulinear::curve::{ContinuousCurve, Element, Parametrized, SmoothPieces};

/// Json string of a curve's elements to paste into a plotting tool while debugging.
pub fn to_debug_json_str(curve: &ContinuousCurve) -> String {
    let elements = curve
        .elements()
        .iter()
        .map(|e| match e {
            Element::Line(l) => format!(
                "{{ \"kind\": \"line\", \"origin\": [{}, {}], \"direction\": [{}, {}] }}",
                l.origin().x,
                l.origin().y,
                l.direction().x,
                l.direction().y
            ),
            Element::Arc(a) => format!(
                "{{ \"kind\": \"arc\", \"center\": [{}, {}], \"radius\": {}, \"startAngle\": {}, \"sweep\": {} }}",
                a.center().x,
                a.center().y,
                a.radius(),
                a.start_angle(),
                a.sweep()
            ),
        })
        .collect::<Vec<_>>()
        .join(",\n        ");

    format!(
        r#"
{{
    "isClosed": {},
    "elements": [
        {}
    ]
}}
"#,
        curve.is_closed(),
        elements
    )
}
