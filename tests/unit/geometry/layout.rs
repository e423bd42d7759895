use super::*;

fn strip() -> Strip {
    Strip::new(500.0, 600.0, 300.0).unwrap()
}

fn budget() -> SampleBudget {
    SampleBudget {
        baseline_samples: 25,
        glyph_samples: 80,
    }
}

#[test]
fn single_glyph_is_centered() {
    let (gap, regions) = place_glyphs(500.0, 88.0, 1).unwrap();
    assert_eq!(gap, 206.0);
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].start_x, 206.0);
    assert_eq!(regions[0].end_x, 294.0);
    assert_eq!(regions[0].center_x, 250.0);
}

#[test]
fn multiple_glyphs_fill_the_strip_exactly() {
    let (gap, regions) = place_glyphs(500.0, 88.0, 3).unwrap();
    let used = 3.0 * 88.0 + 4.0 * gap;
    assert!((used - 500.0).abs() < 1e-9);
    for w in regions.windows(2) {
        assert!((w[1].start_x - w[0].end_x - gap).abs() < 1e-9);
    }
    let last = regions.last().unwrap();
    assert!((500.0 - last.end_x - gap).abs() < 1e-9);
}

#[test]
fn placement_preconditions_fail_fast() {
    assert!(place_glyphs(0.0, 10.0, 1).is_err());
    assert!(place_glyphs(100.0, -1.0, 1).is_err());
    assert!(place_glyphs(100.0, 10.0, 0).is_err());
    assert!(place_glyphs(100.0, 60.0, 2).is_err());
    assert!(place_glyphs(100.0, 50.0, 2).is_ok());
}

#[test]
fn budget_total_counts_inner_baselines() {
    assert_eq!(budget().total(1), 25 * 2 + 80);
    assert_eq!(budget().total(3), 25 * 4 + 80 * 3);
}

#[test]
fn zero_budget_is_rejected() {
    let zero = SampleBudget {
        baseline_samples: 0,
        glyph_samples: 80,
    };
    assert!(LayoutBuilder::new(strip(), 1, 88.0, zero, vec![]).is_err());
}

#[test]
fn gapped_split_floors_left_run() {
    let b = LayoutBuilder::new(
        strip(),
        1,
        88.0,
        SampleBudget {
            baseline_samples: 25,
            glyph_samples: 81,
        },
        vec![],
    )
    .unwrap();
    let layout = b.build().unwrap();
    assert_eq!(layout.total_points(), 131);
    assert_eq!(layout.gapped_split(), (65, 66));
}

#[test]
fn breakpoints_select_glyph_width_and_keep_total() {
    let b = LayoutBuilder::new(
        strip(),
        1,
        88.0,
        budget(),
        vec![
            Breakpoint {
                max_viewport_width: 480.0,
                glyph_width: 60.0,
            },
            Breakpoint {
                max_viewport_width: 900.0,
                glyph_width: 72.0,
            },
        ],
    )
    .unwrap();

    assert_eq!(b.glyph_width_for_viewport(320.0), 60.0);
    assert_eq!(b.glyph_width_for_viewport(480.0), 60.0);
    assert_eq!(b.glyph_width_for_viewport(600.0), 72.0);
    assert_eq!(b.glyph_width_for_viewport(1920.0), 88.0);

    let wide = b.build_for_viewport(1920.0).unwrap();
    let narrow = b.rebuild(&wide, 320.0).unwrap();
    assert_eq!(narrow.glyph_width, 60.0);
    assert_eq!(narrow.total_points(), wide.total_points());
    assert_eq!(narrow.regions[0].center_x, 250.0);
}

#[test]
fn rebuild_rejects_budget_change() {
    let b = LayoutBuilder::new(strip(), 1, 88.0, budget(), vec![]).unwrap();
    let mut other = b.build().unwrap();
    other.budget.glyph_samples = 10;
    assert!(b.rebuild(&other, 800.0).is_err());
}

#[test]
fn unsorted_or_oversized_breakpoints_are_rejected() {
    let unsorted = vec![
        Breakpoint {
            max_viewport_width: 900.0,
            glyph_width: 72.0,
        },
        Breakpoint {
            max_viewport_width: 480.0,
            glyph_width: 60.0,
        },
    ];
    assert!(LayoutBuilder::new(strip(), 1, 88.0, budget(), unsorted).is_err());

    let oversized = vec![Breakpoint {
        max_viewport_width: 480.0,
        glyph_width: 600.0,
    }];
    assert!(LayoutBuilder::new(strip(), 1, 88.0, budget(), oversized).is_err());
}
