//! Shopping List entry point
//!
//! Handles platform-specific initialization and wires the page to the list store.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, Event, HtmlInputElement};

    use shopping_list::platform::LocalStorage;
    use shopping_list::view;
    use shopping_list::{ListError, ListStore, Settings};

    /// Page state shared by all event handlers
    struct App {
        store: ListStore<LocalStorage>,
        settings: Settings,
        document: Document,
    }

    impl App {
        fn input(&self, id: &str) -> Option<HtmlInputElement> {
            self.document
                .get_element_by_id(id)
                .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        }

        fn filter_text(&self) -> String {
            self.input("filterInput")
                .map(|input| input.value())
                .unwrap_or_default()
        }

        /// Rebuild the rows from the store snapshot
        fn render(&self) {
            let Some(list) = self.document.get_element_by_id("itemList") else {
                log::warn!("#itemList not found");
                return;
            };
            list.set_inner_html("");

            let items = self.store.items();
            let visible = view::visible_rows(items, &self.filter_text());
            for (index, (item, shown)) in items.iter().zip(visible).enumerate() {
                match self.create_row(index, item.as_str(), shown) {
                    Ok(row) => {
                        let _ = list.append_child(&row);
                    }
                    Err(e) => log::error!("Failed to create row: {:?}", e),
                }
            }

            self.update_count();
        }

        /// `<li data-index><span class="item-text"/><button class="btn btn-delete"/></li>`
        fn create_row(&self, index: usize, text: &str, shown: bool) -> Result<Element, JsValue> {
            let row = self.document.create_element("li")?;
            row.set_attribute("data-index", &index.to_string())?;
            if !shown {
                row.class_list().add_1("hidden")?;
            }

            let span = self.document.create_element("span")?;
            span.set_class_name("item-text");
            span.set_text_content(Some(text));

            let delete_btn = self.document.create_element("button")?;
            delete_btn.set_class_name("btn btn-delete");
            delete_btn.set_text_content(Some("Delete"));

            row.append_child(&span)?;
            row.append_child(&delete_btn)?;
            Ok(row)
        }

        /// Hide rows that don't match the filter box
        fn apply_filter(&self) {
            let filter = self.filter_text();
            let Ok(rows) = self.document.query_selector_all("#itemList li") else {
                return;
            };

            for i in 0..rows.length() {
                let Some(row) = rows.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                    continue;
                };
                let text = row
                    .query_selector(".item-text")
                    .ok()
                    .flatten()
                    .and_then(|el| el.text_content())
                    .unwrap_or_default();
                set_hidden(&row, !view::matches_filter(&text, &filter));
            }
        }

        /// Update the counter and the empty-list placeholder
        fn update_count(&self) {
            let count = self.store.count();
            if let Some(el) = self.document.get_element_by_id("itemCount") {
                el.set_text_content(Some(&view::count_label(count)));
            }
            if let Some(el) = self.document.get_element_by_id("emptyState") {
                set_hidden(&el, !view::show_empty_state(count));
            }
        }

        fn report(&self, err: &ListError) {
            match view::alert_message(err) {
                Some(message) => {
                    log::warn!("{}", err);
                    show_alert(&self.document, &message, self.settings.alert_ms);
                }
                None => log::error!("{}", err),
            }
        }
    }

    fn set_hidden(el: &Element, hidden: bool) {
        let classes = el.class_list();
        let _ = if hidden {
            classes.add_1("hidden")
        } else {
            classes.remove_1("hidden")
        };
    }

    /// Transient message, removed after `duration_ms`
    fn show_alert(document: &Document, message: &str, duration_ms: u32) {
        let Ok(alert) = document.create_element("div") else {
            return;
        };
        alert.set_class_name("alert");
        alert.set_text_content(Some(message));

        if let Some(body) = document.body() {
            let _ = body.append_child(&alert);
        }

        let closure = Closure::once(move || alert.remove());
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                duration_ms as i32,
            );
        }
        closure.forget();
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Shopping List starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");
        let settings = Settings::load();

        let storage = match LocalStorage::open() {
            Ok(storage) => storage,
            Err(e) => {
                log::error!("{}", e);
                if let Some(message) = view::alert_message(&e) {
                    show_alert(&document, &message, settings.alert_ms);
                }
                return;
            }
        };

        let mut store = ListStore::from_settings(storage, &settings);
        let load_result = store.load_or_recover(settings.on_corrupt);

        let app = Rc::new(RefCell::new(App {
            store,
            settings,
            document,
        }));
        app.borrow().render();
        if let Err(e) = load_result {
            app.borrow().report(&e);
        }

        setup_add_form(app.clone());
        setup_delete_buttons(app.clone());
        setup_filter(app.clone());

        log::info!("Shopping List ready ({} items)", app.borrow().store.count());
    }

    fn setup_add_form(app: Rc<RefCell<App>>) {
        let document = app.borrow().document.clone();
        let Some(form) = document.get_element_by_id("addForm") else {
            log::warn!("#addForm not found");
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |event: Event| {
            event.prevent_default();
            let mut a = app.borrow_mut();
            let Some(input) = a.input("itemInput") else {
                return;
            };

            match a.store.append_text(&input.value()) {
                Ok(item) => {
                    log::info!("Added '{}'", item);
                    input.set_value("");
                    a.render();
                }
                Err(e) => a.report(&e),
            }
        });
        let _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Single click listener on the list, delete buttons are matched by class
    fn setup_delete_buttons(app: Rc<RefCell<App>>) {
        let document = app.borrow().document.clone();
        let Some(list) = document.get_element_by_id("itemList") else {
            log::warn!("#itemList not found");
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |event: Event| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            if !target.class_list().contains("btn-delete") {
                return;
            }

            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message(view::CONFIRM_DELETE_MESSAGE).ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }

            let index = target
                .closest("li")
                .ok()
                .flatten()
                .and_then(|row| row.get_attribute("data-index"))
                .and_then(|idx| idx.parse::<usize>().ok());
            let Some(index) = index else {
                log::warn!("Delete button outside a list row");
                return;
            };

            let mut a = app.borrow_mut();
            match a.store.remove_at(index) {
                Ok(item) => {
                    log::info!("Deleted '{}'", item);
                    a.render();
                }
                Err(e) => a.report(&e),
            }
        });
        let _ = list.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_filter(app: Rc<RefCell<App>>) {
        let document = app.borrow().document.clone();
        let Some(filter) = document.get_element_by_id("filterInput") else {
            log::warn!("#filterInput not found");
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: Event| {
            app.borrow().apply_filter();
        });
        let _ = filter.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Shopping List (native) starting...");
    log::info!("The list UI needs a browser - run with `trunk serve` for the web version");

    println!("\nRunning list store smoke check...");
    match smoke_check() {
        Ok(items) if items == ["bread"] => println!("✓ List store smoke check passed!"),
        Ok(items) => {
            log::error!("Smoke check failed: expected [\"bread\"], got {:?}", items);
            std::process::exit(1);
        }
        Err(e) => {
            log::error!("Smoke check failed: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
/// Add two items, remove one, and return what is left
fn smoke_check() -> Result<Vec<String>, shopping_list::ListError> {
    use shopping_list::platform::MemoryStore;
    use shopping_list::{ListStore, Settings};

    let settings = Settings::load();
    let mut store = ListStore::from_settings(MemoryStore::new(), &settings);
    store.load_or_recover(settings.on_corrupt)?;

    store.append_text("milk")?;
    store.append_text("bread")?;
    store.remove_matching("milk")?;

    let items: Vec<String> = store.load()?.into_iter().map(String::from).collect();
    println!("  {:?} ({})", items, shopping_list::view::count_label(store.count()));
    Ok(items)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_smoke_check_leaves_bread() {
        assert_eq!(smoke_check().unwrap(), ["bread"]);
    }
}
