//! Pizza Toppings entry point
//!
//! Native: runs a scripted customization session headlessly at a fixed frame
//! step and prints lifecycle events and a final snapshot as JSON lines.
//! Usage: `pizza-toppings [tuning.json] [seed]`
//!
//! Web: the library's `web` module is the entry point.

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use pizza_toppings::consts::FRAME_DT_MS;
    use pizza_toppings::{EngineEvent, PieceView, PizzaEngine, PizzaSize};
    use serde::Serialize;

    /// One scripted user action
    #[derive(Debug, Clone, Copy)]
    pub enum Action {
        Select(&'static str),
        Deselect(&'static str),
        Size(PizzaSize),
        Pizza(&'static str),
    }

    /// (time ms, action)
    pub const SCRIPT: [(u64, Action); 8] = [
        (0, Action::Pizza("pepperoni")),
        (0, Action::Select("basil")),
        (100, Action::Select("onion")),
        // Pulled before its pieces land
        (150, Action::Deselect("onion")),
        (400, Action::Select("sausage")),
        (1500, Action::Size(PizzaSize::Large)),
        (1600, Action::Select("mushroom")),
        (1650, Action::Select("pineapple")),
    ];

    /// Hard stop for the session
    const MAX_SESSION_MS: u64 = 10_000;

    #[derive(Serialize)]
    struct EventLine<'a> {
        t: u64,
        event: &'a EngineEvent,
    }

    #[derive(Serialize)]
    struct ToppingSnapshot {
        id: &'static str,
        pieces: Vec<PieceView>,
    }

    #[derive(Serialize)]
    struct Snapshot {
        t: u64,
        pizza: &'static str,
        size: PizzaSize,
        size_scale: f32,
        total_price: f64,
        toppings: Vec<ToppingSnapshot>,
    }

    fn apply(engine: &mut PizzaEngine, action: Action) {
        let result = match action {
            Action::Select(id) => engine.select_topping(id).map(|_| ()),
            Action::Deselect(id) => engine.deselect_topping(id).map(|_| ()),
            Action::Size(size) => {
                engine.set_size(size);
                Ok(())
            }
            Action::Pizza(id) => engine.set_pizza(id).map(|_| ()),
        };
        if let Err(e) = result {
            log::warn!("{:?} rejected: {}", action, e);
        }
    }

    fn print_json<T: Serialize>(value: &T) {
        match serde_json::to_string(value) {
            Ok(line) => println!("{}", line),
            Err(e) => log::error!("Failed to serialize output: {}", e),
        }
    }

    pub fn run(engine: &mut PizzaEngine) {
        let mut next_action = 0;
        let mut frames = 0u32;

        loop {
            while next_action < SCRIPT.len() && SCRIPT[next_action].0 <= engine.now_ms() {
                apply(engine, SCRIPT[next_action].1);
                next_action += 1;
            }

            for event in engine.drain_events() {
                print_json(&EventLine {
                    t: engine.now_ms(),
                    event: &event,
                });
            }

            let script_done = next_action >= SCRIPT.len();
            if (script_done && !engine.is_animating()) || engine.now_ms() >= MAX_SESSION_MS {
                break;
            }

            // Nothing in flight: jump straight to the next scripted action
            let idle = !engine.is_animating() && engine.next_transition_ms().is_none();
            match SCRIPT.get(next_action) {
                Some(&(at, _)) if idle && at > engine.now_ms() => engine.advance_to(at),
                _ => engine.advance(FRAME_DT_MS),
            }
            frames += 1;
        }

        let snapshot = Snapshot {
            t: engine.now_ms(),
            pizza: engine.pizza().id,
            size: engine.size(),
            size_scale: engine.target_size_scale(),
            total_price: engine.total_price(),
            toppings: engine
                .selected_toppings()
                .into_iter()
                .map(|t| ToppingSnapshot {
                    id: t.id,
                    pieces: engine.pieces(t.id),
                })
                .collect(),
        };
        print_json(&snapshot);
        log::info!("Session finished after {} frames", frames);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use pizza_toppings::{PizzaEngine, Tuning};

    env_logger::init();

    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) => Tuning::load_or_default(path),
        None => Tuning::default(),
    };
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);

    log::info!("Pizza Toppings (native) starting, seed {}", seed);
    let mut engine = PizzaEngine::with_seed(tuning, seed);
    demo::run(&mut engine);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::start, this is just to satisfy the compiler
}
