// Example: drill into an itemset, zoom the outer ring, then reset.
use sunburst::{Item, Itemset, RingKind, Visualization, VisualizationData, VisualizationOptions};

fn main() {
    let data = VisualizationData {
        items: vec![
            Item::new("bread", "product=bread"),
            Item::new("milk", "product=milk"),
            Item::new("eggs", "product=eggs").with_icon("egg"),
            Item::new("jam", "product=jam"),
        ],
        itemsets: vec![
            Itemset::new(["bread"], 0.7),
            Itemset::new(["milk"], 0.6),
            Itemset::new(["eggs"], 0.4),
            Itemset::new(["jam"], 0.2),
            Itemset::new(["bread", "milk"], 0.45),
            Itemset::new(["bread", "jam"], 0.15),
            Itemset::new(["bread", "milk", "eggs"], 0.2),
            Itemset::new(["bread", "milk", "eggs", "jam"], 0.05),
        ],
    };

    let options = VisualizationOptions::new()
        .with_scope("basket")
        .with_on_change(Some(|v: &Visualization| {
            println!(
                "update #{}: root={:?} selected={:?}",
                v.generation(),
                v.detail().root_item_ids(),
                v.detail().selected_item_ids()
            );
        }));
    let mut v = match Visualization::new(data, options) {
        Ok(v) => v,
        Err(err) => {
            eprintln!("invalid input: {err}");
            return;
        }
    };

    print_ring(&v, RingKind::Detail);

    v.click_item(RingKind::Detail, "bread");
    print_ring(&v, RingKind::Detail);

    if let Some(bme) = v.dataset().find_itemset_by_ids(&["bread", "milk", "eggs"]) {
        v.click_itemset(RingKind::Detail, bme);
        print_ring(&v, RingKind::Detail);
    }

    println!("links={:?}", v.links().map(|l| l.polylines()));
    println!("reset_visible={}", v.is_reset_visible());
    v.reset();
    println!("reset_visible={}", v.is_reset_visible());
}

fn print_ring(v: &Visualization, kind: RingKind) {
    let Some(ring) = v.ring(kind) else {
        return;
    };
    let ds = ring.dataset();
    for (i, a) in ring.layout().itemsets.iter().enumerate() {
        if a.is_hidden() {
            continue;
        }
        let ids: Vec<&str> = ds.ids(ds.members(i)).collect();
        println!(
            "  {ids:?}: [{:.3}, {:.3}] r={:.1}",
            a.start_angle, a.end_angle, a.outer_radius
        );
    }
}
