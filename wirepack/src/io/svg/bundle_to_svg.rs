use std::fmt::Display;

use crate::entities::BundleResult;
use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::Circle;
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;
use itertools::Itertools;
use svg::Document;
use svg::node::element::{Group, Text, Title};

/// Draws the cross-section of a bundle: every wire, the enclosing circle and (optionally) the margin around it.
///
/// Wires are shaded by their radius relative to the largest wire of the bundle.
pub fn bundle_to_svg<L: Display, P>(
    bundle: &BundleResult<L, P>,
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    let theme = &options.theme;
    let enclosing = bundle.enclosing.circle();
    let outer = Circle::new(enclosing.center, enclosing.radius + bundle.margin);

    let vbox = outer.bbox().scale(1.15);
    let size = f64::min(vbox.width(), vbox.height());
    let stroke_width = size * 0.001 * theme.stroke_width_multiplier;

    let header = {
        //print the diameters above the left top of the bundle
        let bbox = outer.bbox();
        let content = format!(
            "wires: {} | diameter: {:.3} | with margin: {:.3} | density: {:.2}% | {}",
            bundle.layout.len(),
            bundle.outer_diameter,
            bundle.outer_diameter_with_margin,
            bundle.density() * 100.0,
            title,
        );
        Text::new(content)
            .set("x", vbox.x_min + 0.02 * size)
            .set("y", bbox.y_min - 0.025 * size)
            .set("font-size", size * 0.02)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    let enclosing_group = {
        let mut group = Group::new().set("id", "enclosing");
        if options.margin && bundle.margin > 0.0 {
            group = group.add(
                svg_util::circle(
                    outer,
                    &[
                        ("fill", &*format!("{}", theme.margin_fill)),
                        ("stroke", &*format!("{}", svg_util::change_brightness(theme.margin_fill, 0.5))),
                        ("stroke-width", &*format!("{}", stroke_width)),
                        ("stroke-dasharray", &*format!("{}", 5.0 * stroke_width)),
                    ],
                )
                .add(Title::new(format!("margin: {:.3}", bundle.margin))),
            );
        }
        group.add(
            svg_util::circle(
                enclosing,
                &[
                    ("fill", &*format!("{}", theme.enclosing_fill)),
                    ("stroke", &*format!("{}", theme.enclosing_stroke)),
                    ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
                ],
            )
            .add(Title::new(format!(
                "enclosing circle, center: ({:.3}, {:.3}), r: {:.3}, converged: {}, iterations: {}",
                enclosing.center.0,
                enclosing.center.1,
                enclosing.radius,
                bundle.enclosing.converged,
                bundle.enclosing.iterations
            ))),
        )
    };

    let wires_group = {
        let (r_min, r_max) = bundle
            .layout
            .iter()
            .map(|c| c.radius)
            .minmax_by(f64::total_cmp)
            .into_option()
            .unwrap_or((0.0, 0.0));

        bundle
            .layout
            .iter()
            .enumerate()
            .fold(Group::new().set("id", "wires"), |group, (i, wire)| {
                let t = match r_max > r_min {
                    true => (wire.radius - r_min) / (r_max - r_min),
                    false => 1.0,
                };
                let fill = svg_util::interpolate_colors(theme.small_wire_fill, theme.large_wire_fill, t);
                group.add(
                    svg_util::circle(
                        wire.circle(),
                        &[
                            ("fill", &*format!("{}", fill)),
                            ("stroke", &*format!("{}", svg_util::change_brightness(fill, 0.5))),
                            ("stroke-width", &*format!("{}", stroke_width)),
                        ],
                    )
                    .add(Title::new(format!(
                        "#{i}: {}, r: {:.3}, center: ({:.3}, {:.3})",
                        wire.label, wire.radius, wire.x, wire.y
                    ))),
                )
            })
    };

    let mut document = Document::new()
        .set("viewBox", (vbox.x_min, vbox.y_min, vbox.width(), vbox.height()))
        .add(enclosing_group)
        .add(wires_group);

    if options.center {
        document = document.add(svg_util::point(
            enclosing.centroid(),
            Some(&*format!("{}", theme.enclosing_stroke)),
            Some(3.0 * stroke_width),
        ));
    }
    if options.header {
        document = document.add(header);
    }
    document
}
