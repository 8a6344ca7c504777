#![cfg(target_arch = "wasm32")]
use donut_core::{Action, AppState, DonutConfig, LoggerMiddleware, Scene, Store};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod controls;
mod dom;
mod view;

type SharedStore = Rc<RefCell<Store>>;

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

fn scene_for_query(query: &str, seed: Option<u64>) -> Result<Scene, JsError> {
    let config = DonutConfig::from_query(query).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(view::donut_scene(&config, &mut rng_for(seed)))
}

/// Render the donut for `query` (e.g. `inner-radius=0.3&sprinkle-coverage=0.5`)
/// as an SVG document.
#[wasm_bindgen]
pub fn render_donut_svg(query: &str, seed: Option<u64>) -> Result<String, JsError> {
    let scene = scene_for_query(query, seed)?;
    Ok(donut_core::render_svg(&scene))
}

/// Render the donut for `query` as a JSON scene description.
#[wasm_bindgen]
pub fn render_donut_json(query: &str, seed: Option<u64>) -> Result<String, JsError> {
    let scene = scene_for_query(query, seed)?;
    serde_json::to_string(&scene).map_err(|e| JsError::new(&e.to_string()))
}

fn initial_config() -> DonutConfig {
    let query = dom::location_search().unwrap_or_default();
    DonutConfig::from_query(&query).unwrap_or_else(|e| {
        log::warn!("ignoring page query: {e}");
        DonutConfig::default()
    })
}

fn sync_controls(document: &web::Document, config: &DonutConfig) {
    for (id, key) in controls::control_ids() {
        if let Some(input) = dom::input_by_id(document, id) {
            input.set_value(&controls::control_value(config, key));
        }
    }
}

fn wire_controls(document: &web::Document, store: &SharedStore) {
    for (id, key) in controls::control_ids() {
        if let Some(input) = dom::input_by_id(document, id) {
            let range = controls::control_range(key);
            _ = input.set_attribute("min", &range.min.to_string());
            _ = input.set_attribute("max", &range.max.to_string());
            _ = input.set_attribute("step", &range.step.to_string());
        }
        let store = store.clone();
        let wired = dom::add_input_listener(document, id, move |value| {
            match controls::action_for_control(id, &value) {
                Ok(action) => {
                    store.borrow_mut().dispatch(action);
                }
                Err(e) => log::warn!("[controls] {e}"),
            }
        });
        if !wired {
            log::debug!("[controls] no #{id} input on page");
        }
    }

    let store = store.clone();
    dom::add_click_listener(document, constants::RESET_BUTTON_ID, move || {
        store.borrow_mut().dispatch(Action::Reset);
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("donut-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let root = document
        .get_element_by_id(constants::DONUT_ROOT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::DONUT_ROOT_ID))?;

    let config = initial_config();
    let store: SharedStore = Rc::new(RefCell::new(
        Store::new(AppState::new(config)).with_middleware(LoggerMiddleware::new(true)),
    ));
    let rng = Rc::new(RefCell::new(StdRng::from_entropy()));

    let paint = {
        let root = root.clone();
        let rng = rng.clone();
        move |config: &DonutConfig| {
            let scene = view::donut_scene(config, &mut *rng.borrow_mut());
            dom::set_inner_html(&root, &view::donut_markup(&scene));
        }
    };
    paint(&config);
    sync_controls(&document, &config);

    {
        let document = document.clone();
        store.borrow_mut().subscribe(move |state: &AppState| {
            paint(&state.donut);
            sync_controls(&document, &state.donut);
        });
    }
    wire_controls(&document, &store);

    log::info!(
        "[donut] ready inner={:.2} outer={:.2}",
        config.inner_radius_scale,
        config.outer_radius_scale
    );
    Ok(())
}
