// File: crates/plotline-core/tests/ticks.rs
// Purpose: Validate tick label values and tick pixel positions.

use plotline_core::{ChartConfig, ChartStyle, Layout};

fn layout_for(config: ChartConfig) -> Layout {
    Layout::compute(&config, &ChartStyle::light(), 800, 500, |_| 24.0)
}

#[test]
fn x_labels_step_up_to_the_max() {
    let layout = layout_for(ChartConfig::new(0.0, 0.0, 100.0, 100.0, 20.0, 25.0));
    let labels: Vec<i64> = (0..layout.num_x_ticks).map(|n| layout.x_tick_value(n)).collect();
    assert_eq!(labels, vec![20, 40, 60, 80, 100]);
}

#[test]
fn y_labels_step_down_from_the_top_row() {
    let layout = layout_for(ChartConfig::new(0.0, 0.0, 100.0, 100.0, 20.0, 25.0));
    let labels: Vec<i64> = (0..layout.num_y_ticks).map(|n| layout.y_tick_value(n)).collect();
    assert_eq!(labels, vec![100, 75, 50, 25]);
}

#[test]
fn ticks_divide_the_plot_evenly() {
    let layout = layout_for(ChartConfig::new(0.0, 0.0, 100.0, 100.0, 20.0, 25.0));

    for n in 0..layout.num_x_ticks {
        let want = layout.origin_x + (n + 1) as f32 * layout.plot_w / 5.0;
        assert!((layout.x_tick_px(n) - want).abs() < 1e-4);
    }

    // The first Y row sits on the plot's top edge, later rows at n/4 of
    // the plot height.
    assert_eq!(layout.y_tick_px(0), layout.origin_y);
    let last = layout.y_tick_px(layout.num_y_ticks - 1);
    assert!((last - (layout.origin_y + 3.0 * layout.plot_h / 4.0)).abs() < 1e-4);
}

#[test]
fn labels_round_to_whole_units() {
    // 7 units across 3 ticks: exact values 2.33.., 4.66.., 7
    let layout = layout_for(ChartConfig::new(0.0, 0.0, 7.0, 7.0, 2.3, 2.3));
    assert_eq!(layout.num_x_ticks, 3);
    let labels: Vec<i64> = (0..layout.num_x_ticks).map(|n| layout.x_tick_value(n)).collect();
    assert_eq!(labels, vec![2, 5, 7]);
}
