use gloo_file::File as GlooFile;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::FileList;
use yew::prelude::*;

pub const FILE_INPUT_ID: &str = "file-input";

// Debounce function to limit button events
pub fn debounce<F>(duration: i32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));
    let timeout_clone = Rc::clone(&timeout);

    Callback::from(move |_| {
        let mut timeout_ref = timeout_clone.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        let new_timeout = Timeout::new(duration as u32, move || {
            inner_callback();
        });

        *timeout_ref = Some(new_timeout);
    })
}

/// First file of a drop or paste. Non-image files are let through, the
/// picker's `accept` filter is the only gate.
pub fn first_file(file_list: &FileList) -> Option<GlooFile> {
    let file = file_list.item(0)?;
    if !file.type_().starts_with("image/") {
        log::warn!("Accepting non-image file: {} ({})", file.name(), file.type_());
    }
    Some(GlooFile::from(file))
}

/// Opens the hidden file picker.
pub fn open_file_picker() {
    let input = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(FILE_INPUT_ID))
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok());

    if let Some(input) = input {
        input.click();
    }
}
