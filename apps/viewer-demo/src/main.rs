//! Console walkthrough of the presentation layer: builds a small synthetic
//! hierarchy snapshot and drives every component once, printing what a
//! graphical frontend would draw.

use anyhow::Result;
use vistree_hierarchy::{
    Category, Hierarchy, HierarchyBuilder, Locations, NodeMetadata, NodeType,
};
use vistree_present::{
    apply_location, children_to_render, classify, compose_local_id, entry_children, search,
    LocalIdState, LocationSpec, NavigationController, PresentationEntry, SearchOutcome,
};

fn meta(
    category: Category,
    node_type: NodeType,
    name: &str,
    common: Option<&str>,
) -> NodeMetadata {
    NodeMetadata {
        category,
        node_type,
        name: name.to_string(),
        common_name: common.map(str::to_string),
        definition: None,
    }
}

/// A miniature version snapshot with the structures the viewer cares
/// about: transparent selections, designated product types, a shared
/// multi-parent product.
fn sample_hierarchy() -> Result<Hierarchy> {
    let hierarchy = HierarchyBuilder::new()
        .node(
            "VE",
            meta(Category::Asset, NodeType::Group, "Vessel", None),
            &[],
            &["400", "411"],
            None,
        )
        .node(
            "400",
            meta(Category::AssetFunction, NodeType::Group, "Ship general", None),
            &["VE"],
            &["400s"],
            None,
        )
        .node(
            "400s",
            meta(
                Category::AssetFunction,
                NodeType::Selection,
                "Hull form alternatives",
                None,
            ),
            &["400"],
            &["400a", "400b"],
            None,
        )
        .node(
            "400a",
            meta(Category::AssetFunction, NodeType::Leaf, "Monohull", None),
            &["400s"],
            &[],
            None,
        )
        .node(
            "400b",
            meta(Category::AssetFunction, NodeType::Leaf, "Catamaran", None),
            &["400s"],
            &[],
            None,
        )
        .node(
            "411",
            meta(Category::AssetFunction, NodeType::Group, "Propulsion", None),
            &["VE"],
            &["411.1"],
            None,
        )
        .node(
            "411.1",
            meta(
                Category::AssetFunction,
                NodeType::Leaf,
                "Propulsion driver",
                Some("Main engine arrangement"),
            ),
            &["411"],
            &["C101"],
            Some("C101"),
        )
        .node(
            "C101",
            meta(Category::Product, NodeType::Type, "Engine", Some("Diesel engine")),
            &["411.1"],
            &["C101.3"],
            None,
        )
        .node(
            "C101.3",
            meta(
                Category::ProductFunction,
                NodeType::Leaf,
                "Cooling system",
                None,
            ),
            &["C101"],
            &[],
            None,
        )
        .build()?;
    Ok(hierarchy)
}

/// Prints one presentation row and recurses through its effective children.
fn print_entry(hierarchy: &Hierarchy, entry: &PresentationEntry<'_>, depth: usize) {
    let class = classify(entry.node);
    let marker = if entry.has_visible_children { ">" } else { "-" };
    let badge = entry
        .badge_parent
        .map(|parent| format!("[{}] ", parent.code()))
        .unwrap_or_default();
    let (r, g, b) = class.color_class.badge_rgb();
    println!(
        "{:indent$}{marker} {badge}{code}  {name}  (#{r:02x}{g:02x}{b:02x})",
        "",
        code = entry.node.code(),
        name = entry.node.display_name(),
        indent = depth * 2,
    );
    for child in entry_children(hierarchy, entry) {
        print_entry(hierarchy, &child, depth + 1);
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let hierarchy = sample_hierarchy()?;
    let locations = Locations::standard();
    log::info!("sample hierarchy loaded: {} nodes", hierarchy.len());

    println!("=== Presentation tree ({} nodes) ===", hierarchy.len());
    let root = hierarchy.root();
    for entry in children_to_render(&hierarchy, root) {
        print_entry(&hierarchy, &entry, 0);
    }

    println!();
    println!("=== Search ===");
    for query in ["engine", "411.1/C101", "40"] {
        match search(query, &hierarchy, &locations) {
            SearchOutcome::Path(hit) => {
                let chain: Vec<&str> = hit.breadcrumb.iter().map(|n| n.code()).collect();
                println!("{query:?} resolved as path: {}", chain.join(" / "));
            }
            SearchOutcome::Text(results) => {
                println!("{query:?} matched {} node(s):", results.len());
                for result in results {
                    let trail: Vec<&str> =
                        result.breadcrumb.iter().map(|n| n.code()).collect();
                    println!("  {}  ({})", trail.join(" > "), result.node.display_name());
                }
            }
        }
    }

    println!();
    println!("=== Navigation ===");
    let mut nav = NavigationController::new();
    nav.select("C101.3", &hierarchy);
    let mut pass_order = vec![];
    for code in ["VE", "411", "411.1", "C101.3"] {
        let node = hierarchy
            .node(code)
            .ok_or_else(|| anyhow::anyhow!("sample code {code} missing"))?;
        let directive = nav.visit(
            code,
            vistree_present::has_visible_children(&hierarchy, node),
        );
        if directive.force_open {
            pass_order.push(format!("open {code}"));
        }
        if directive.scroll_into_view {
            pass_order.push(format!("scroll to {code}"));
        }
    }
    nav.finish_pass();
    println!("pass effects: {}", pass_order.join(", "));

    println!();
    println!("=== Location editing ===");
    let spec = LocationSpec {
        number: Some(1),
        side: Some('P'),
        ..LocationSpec::default()
    };
    let edited = apply_location("411.1/C101", &spec, &hierarchy, &locations);
    println!("411.1/C101 + {{1, port}} -> {edited}");

    println!();
    println!("=== LocalId ===");
    let mut books = indexmap::IndexMap::new();
    books.insert(
        vistree_hierarchy::CodebookName::Quantity,
        vistree_hierarchy::Codebook::new(vec![
            "temperature".to_string(),
            "pressure".to_string(),
        ]),
    );
    let codebooks = vistree_hierarchy::Codebooks::new(books);
    let state = LocalIdState {
        primary_path: edited,
        quantity: "temperature".to_string(),
        detail: "main sensor".to_string(),
        ..LocalIdState::default()
    };
    let local_id = compose_local_id(&state, "3-8a", &codebooks);
    println!("{local_id}");

    Ok(())
}
