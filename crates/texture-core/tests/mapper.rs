// File: crates/texture-core/tests/mapper.rs
// Purpose: Coordinate mapping of grid lines, boundary, guide lines and meeting point.

use texture_core::boundary::{vertex_count, CLASS_BOUNDARY};
use texture_core::{class_boundary_polygon, CanvasGeometry, Component, Composition, Point, TextureCoordinateMapper};

const EPS: f64 = 1e-9;

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
}

fn mapper(w: f64, h: f64) -> TextureCoordinateMapper {
    TextureCoordinateMapper::new(CanvasGeometry::new(w, h))
}

#[test]
fn line_gap_and_vertices() {
    let g = CanvasGeometry::new(400.0, 400.0);
    assert!((g.line_gap() - 32.0).abs() < EPS);
    assert!(close(g.apex(), Point::new(200.0, 40.0)));
    assert!(close(g.bottom_left(), Point::new(40.0, 360.0)));
    assert!(close(g.bottom_right(), Point::new(360.0, 360.0)));
}

#[test]
fn eleven_grid_lines_per_axis() {
    for (w, h) in [(400.0, 400.0), (123.0, 987.0), (1024.0, 640.0)] {
        let lines = mapper(w, h).grid_lines();
        assert_eq!(lines.len(), 33);
        for axis in Component::ALL {
            let per_axis: Vec<_> = lines.iter().filter(|l| l.axis == axis).collect();
            assert_eq!(per_axis.len(), 11, "{axis} at {w}x{h}");
            let percents: Vec<u32> = per_axis.iter().map(|l| l.percent).collect();
            assert_eq!(percents, (0..=100).step_by(10).collect::<Vec<u32>>());
        }
    }
}

#[test]
fn consecutive_grid_lines_are_one_gap_apart() {
    let m = mapper(500.0, 300.0);
    let gap = m.geometry().line_gap();
    let lines = m.grid_lines();
    for axis in Component::ALL {
        let per_axis: Vec<_> = lines.iter().filter(|l| l.axis == axis).collect();
        for pair in per_axis.windows(2) {
            let (a, b) = (pair[0].segment, pair[1].segment);
            match axis {
                Component::Clay => assert!(((a.from.y - b.from.y) - gap).abs() < EPS),
                Component::Sand => assert!(((a.from.x - b.from.x) - gap).abs() < EPS),
                Component::Silt => assert!(((b.from.x - a.from.x) - gap).abs() < EPS),
            }
        }
    }
}

#[test]
fn clay_lines_are_horizontal_and_diagonals_reach_apex_row() {
    let m = mapper(400.0, 400.0);
    let g = *m.geometry();
    for line in m.grid_lines() {
        let s = line.segment;
        match line.axis {
            Component::Clay => assert_eq!(s.from.y, s.to.y),
            _ => {
                assert_eq!(s.from.y, g.base_y());
                assert_eq!(s.to.y, g.inset_y());
            }
        }
    }
    // 0% sand and 0% silt lines are the triangle's right and left edges.
    let lines = m.grid_lines();
    let sand0 = lines.iter().find(|l| l.axis == Component::Sand && l.percent == 0).unwrap();
    let silt0 = lines.iter().find(|l| l.axis == Component::Silt && l.percent == 0).unwrap();
    assert!(close(sand0.segment.from, g.bottom_right()) && close(sand0.segment.to, g.apex()));
    assert!(close(silt0.segment.from, g.bottom_left()) && close(silt0.segment.to, g.apex()));
}

#[test]
fn meeting_point_reference_value() {
    let m = mapper(400.0, 400.0);
    let c = Composition::new(20.0, 20.0, 60.0).unwrap();
    let p = m.meeting_point(&c);
    // x = 200 - ((2 - 2) * 32) / 2, y = 400 - (40 + 32 * 6)
    assert!(close(p, Point::new(200.0, 168.0)));
}

#[test]
fn meeting_point_is_bit_identical_on_recompute() {
    let m = mapper(400.0, 400.0);
    let c = Composition::new(20.0, 20.0, 60.0).unwrap();
    let a = m.meeting_point(&c);
    let b = m.meeting_point(&c);
    assert_eq!(a.x.to_bits(), b.x.to_bits());
    assert_eq!(a.y.to_bits(), b.y.to_bits());
}

#[test]
fn meeting_point_stays_inside_padding_on_square_surfaces() {
    for size in [100.0, 400.0, 777.0] {
        let m = mapper(size, size);
        let g = *m.geometry();
        for silt in 0..=100 {
            for sand in 0..=(100 - silt) {
                let clay = 100 - silt - sand;
                let c = Composition::new(silt as f64, sand as f64, clay as f64).unwrap();
                let p = m.meeting_point(&c);
                assert!(p.x >= g.inset_x() - EPS && p.x <= g.width - g.inset_x() + EPS, "{c} -> {p:?}");
                assert!(p.y >= g.inset_y() - EPS && p.y <= g.base_y() + EPS, "{c} -> {p:?}");
            }
        }
    }
}

#[test]
fn pure_compositions_land_on_corners() {
    let m = mapper(400.0, 400.0);
    let g = *m.geometry();
    let at = |s, a, c| m.meeting_point(&Composition::new(s, a, c).unwrap());
    assert!(close(at(0.0, 0.0, 100.0), g.apex()));
    assert!(close(at(0.0, 100.0, 0.0), g.bottom_left()));
    assert!(close(at(100.0, 0.0, 0.0), g.bottom_right()));
}

#[test]
fn meeting_point_sits_on_matching_clay_grid_line() {
    let m = mapper(640.0, 480.0);
    let lines = m.grid_lines();
    for clay in (0..=100).step_by(10) {
        let c = Composition::new((100 - clay) as f64, 0.0, clay as f64).unwrap();
        let p = m.meeting_point(&c);
        let line = lines.iter().find(|l| l.axis == Component::Clay && l.percent == clay as u32).unwrap();
        assert_eq!(p.y.to_bits(), line.segment.from.y.to_bits());
    }
}

#[test]
fn guide_lines_end_at_meeting_point() {
    let m = mapper(400.0, 400.0);
    let g = *m.geometry();
    let c = Composition::new(40.0, 30.0, 30.0).unwrap();
    let meet = m.meeting_point(&c);
    let guides = m.guide_lines(&c);
    assert_eq!(guides.map(|l| l.axis), [Component::Sand, Component::Silt, Component::Clay]);
    for line in guides {
        assert_eq!(line.segment.to, meet);
    }
    // sand starts on the base, silt on the apex row, clay on the left inset
    assert!(close(guides[0].segment.from, Point::new(400.0 - (40.0 + 32.0 * 3.0), g.base_y())));
    assert!(close(guides[1].segment.from, Point::new(200.0 + 32.0 * 4.0, g.inset_y())));
    assert!(close(guides[2].segment.from, Point::new(40.0, 400.0 - (40.0 + 32.0 * 3.0))));
}

#[test]
fn boundary_table_is_fractions_and_scales_with_surface() {
    assert_eq!(vertex_count(), 30);
    assert_eq!(class_boundary_polygon().len(), 2);
    for stroke in class_boundary_polygon() {
        for &(fx, fy) in stroke.iter() {
            assert!((0.0..=1.0).contains(&fx) && (0.0..=1.0).contains(&fy));
        }
    }

    let small = mapper(400.0, 400.0).class_boundary();
    let large = mapper(800.0, 600.0).class_boundary();
    for (si, stroke) in CLASS_BOUNDARY.iter().enumerate() {
        for (vi, &(fx, fy)) in stroke.iter().enumerate() {
            assert!(close(small[si][vi], Point::new(400.0 * fx, 400.0 * fy)));
            assert!(close(large[si][vi], Point::new(800.0 * fx, 600.0 * fy)));
        }
    }
    // the table itself is untouched by scaling
    assert_eq!(CLASS_BOUNDARY[1], &[(0.74, 0.90), (0.78, 0.82), (0.86, 0.82)]);
}

#[test]
fn outside_mask_wraps_surface_around_triangle() {
    let m = mapper(400.0, 400.0);
    let g = *m.geometry();
    let mask = m.outside_mask();
    assert_eq!(mask.len(), 10);
    assert!(mask.contains(&g.apex()) && mask.contains(&g.bottom_left()) && mask.contains(&g.bottom_right()));
    assert!(mask.contains(&Point::new(400.0, 400.0)));
    assert!((m.point_radius() - 2.0).abs() < EPS);
}
