use sunburst::{Item, Itemset, RingKind, VisualizationData, VisualizationOptions};
use sunburst_adapter::{Controller, Easing, PathRenderer, TransitionOptions};

fn main() {
    // Example: an adapter driving transitions without holding any UI objects.
    //
    // An adapter would:
    // - forward clicks with the current time
    // - call tick(now_ms) in a frame loop while animating
    // - draw the returned paths (and blend itemset fills with its own palette)
    let data = VisualizationData {
        items: ["A", "B", "C", "D"]
            .iter()
            .map(|id| Item::new(*id, format!("feature={id}")))
            .collect(),
        itemsets: vec![
            Itemset::new(["A"], 0.8),
            Itemset::new(["B"], 0.6),
            Itemset::new(["C"], 0.5),
            Itemset::new(["D"], 0.3),
            Itemset::new(["A", "B"], 0.4),
            Itemset::new(["A", "C"], 0.35),
            Itemset::new(["A", "B", "C"], 0.2),
        ],
    };
    let transition = TransitionOptions::new()
        .with_duration_ms(240)
        .with_easing(Easing::SmoothStep);
    let mut c = match Controller::new(data, VisualizationOptions::new(), transition) {
        Ok(c) => c,
        Err(err) => {
            eprintln!("invalid input: {err}");
            return;
        }
    };
    let mut renderer = PathRenderer::default();

    let mut now_ms = 0u64;
    c.click_item(RingKind::Detail, "A", now_ms);
    // A second click lands mid-flight and re-bases every shape.
    now_ms += 96;
    c.reset(now_ms);

    while c.tick(now_ms) {
        let drawing = c.draw(&mut renderer, now_ms);
        println!(
            "t={now_ms} arcs={} links={}",
            drawing.arcs.len(),
            drawing.links.len()
        );
        now_ms += 16;
    }

    let frame = c.frame(now_ms);
    println!(
        "settled: visible={} labels={} reset_visible={}",
        frame.visible_arcs().count(),
        frame.labels.iter().filter(|l| l.visible).count(),
        frame.reset_visible
    );
}
