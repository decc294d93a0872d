use std::cell::Cell;
use std::rc::Rc;

use overlay::{
    EngineConfig, Measure, NormalizedOffsets, Placement, PlacementState, PositioningEngine,
    PositioningInstance, RawOffset, Size, Tether, TetherOptions,
};

#[derive(Clone)]
struct Element {
    name: &'static str,
    size: Rc<Cell<Size>>,
    y: f64,
}

impl Measure for Element {
    fn bounding_size(&self) -> Size {
        self.size.get()
    }
}

/// Places the popper right below the anchor, flush left.
struct BelowEngine;

struct BelowInstance {
    anchor: Element,
    popper: Element,
}

impl PositioningEngine<Element> for BelowEngine {
    type Instance = BelowInstance;

    fn create(
        &mut self,
        anchor: &Element,
        popper: &Element,
        _arrow: Option<&Element>,
        config: &EngineConfig,
    ) -> BelowInstance {
        println!(
            "create({} -> {}) placement={} modifiers={:?}",
            anchor.name,
            popper.name,
            config.engine_placement(),
            config.modifiers.iter().map(|m| m.name.as_ref()).collect::<Vec<_>>()
        );
        BelowInstance {
            anchor: anchor.clone(),
            popper: popper.clone(),
        }
    }
}

impl PositioningInstance for BelowInstance {
    fn update(&mut self) -> Option<PlacementState> {
        let a = self.anchor.bounding_size();
        let p = self.popper.bounding_size();
        println!("  recompute: anchor={a:?} popper={p:?}");
        Some(PlacementState {
            placement: Placement::BottomLeft,
            popper_offsets: RawOffset::new(0.25, self.anchor.y + a.height + 0.5),
            arrow: None,
        })
    }

    fn destroy(&mut self) {
        println!("destroy");
    }
}

fn main() {
    let opts = TetherOptions::new()
        .with_placement(Placement::BottomLeft)
        .with_on_popper_update(Some(|o: &NormalizedOffsets, s: &PlacementState| {
            println!(
                "  popper top={}px left={}px ({:?})",
                o.popper.top, o.popper.left, s.placement
            );
        }));
    let mut tether = Tether::new(opts, BelowEngine);
    tether.mount();

    let list = Element {
        name: "list",
        size: Rc::new(Cell::new(Size::new(240.0, 400.0))),
        y: 0.0,
    };
    let input = Element {
        name: "input",
        size: Rc::new(Cell::new(Size::new(240.0, 32.0))),
        y: 100.0,
    };

    // The floating element often attaches before its anchor.
    tether.set_popper(Some(list.clone()));
    tether.update();
    tether.set_anchor(Some(input));
    tether.update();

    println!("filter shrinks the list");
    list.size.set(Size::new(240.0, 120.0));
    tether.update();
    tether.update();

    tether.unmount();
}
