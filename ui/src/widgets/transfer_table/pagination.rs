//! Pagination strip and page size selector of the transfers table.

use egui::{Button, ComboBox, Ui};
use payops_business::{PageSize, Pager, PaginationState};

pub const PREVIOUS_LABEL: &str = "◀ Previous";
pub const NEXT_LABEL: &str = "Next ▶";

/// Renders previous/page links/next. Returns the page the user picked.
///
/// Nothing is rendered when there is at most one page. Page link numbers
/// are passed on as is; clamping is up to the owner of the state.
pub fn pagination_strip(ui: &mut Ui, state: &PaginationState) -> Option<u32> {
    let pager = Pager::new(state);
    if !pager.is_visible() {
        return None;
    }

    let mut picked = None;
    ui.horizontal(|ui| {
        let previous = ui.add_enabled(pager.previous_enabled(), Button::new(PREVIOUS_LABEL));
        if previous.clicked() {
            picked = pager.previous_page();
        }

        for page in pager.page_links() {
            if ui
                .selectable_label(pager.is_current(page), page.to_string())
                .clicked()
            {
                picked = Some(page);
            }
        }

        let next = ui.add_enabled(pager.next_enabled(), Button::new(NEXT_LABEL));
        if next.clicked() {
            picked = pager.next_page();
        }
    });

    if let Some(page) = picked {
        log::debug!("Pagination strip picked page {page}");
    }
    picked
}

/// Renders the "Show:" combo box. Returns the newly chosen page size.
pub fn page_size_selector(ui: &mut Ui, page_size: u32) -> Option<u32> {
    let mut picked: Option<PageSize> = None;

    ComboBox::from_id_salt("transfer_page_size")
        .width(64.0)
        .selected_text(page_size.to_string())
        .show_ui(ui, |ui| {
            for size in PageSize::ALL {
                if ui
                    .selectable_label(size.get() == page_size, size.to_string())
                    .clicked()
                {
                    picked = Some(size);
                }
            }
        });

    picked.and_then(|size| page_size_change(page_size, size))
}

/// The size to report when `picked` is chosen while `current` is shown.
pub fn page_size_change(current: u32, picked: PageSize) -> Option<u32> {
    (picked.get() != current).then(|| picked.get())
}
