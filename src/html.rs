//! Shared markup building blocks and display formatting helpers.

use std::sync::OnceLock;

use maud::{DOCTYPE, Markup, html};
use numfmt::{Formatter, Precision};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::Error;

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "inline-flex items-center px-4 py-2 \
    bg-green-600 hover:bg-green-700 text-white text-sm font-medium rounded";

pub const BUTTON_OUTLINE_STYLE: &str = "inline-flex items-center px-4 py-2 \
    text-sm font-medium text-gray-900 bg-white rounded border border-gray-200 \
    hover:bg-gray-100 dark:bg-gray-800 dark:text-gray-300 \
    dark:border-gray-600 dark:hover:bg-gray-700";

// Table styles
pub const TABLE_HEADER_STYLE: &str = "text-xs text-gray-700 uppercase \
    bg-gray-50 dark:bg-gray-700 dark:text-gray-400";

pub const TABLE_ROW_STYLE: &str = "bg-white border-b dark:bg-gray-800 \
    dark:border-gray-700 hover:bg-gray-50 dark:hover:bg-gray-700/50";

pub const TABLE_CELL_STYLE: &str = "px-6 py-4";

// Panel/card container style shared by the dashboard panels.
pub const CARD_STYLE: &str = "bg-white dark:bg-gray-800 border border-gray-200 \
    dark:border-gray-700 rounded-lg p-6 shadow-sm";

// Page container
pub const PAGE_CONTAINER_STYLE: &str =
    "flex flex-col px-6 py-8 mx-auto max-w-screen-xl text-gray-900 dark:text-white";

/// The base page chrome shared by every view.
///
/// htmx and the stylesheet are loaded from CDNs, so the server does not
/// need to serve any static assets itself.
pub fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Finboard" }

                script src="https://unpkg.com/htmx.org@2.0.8" {}
                script src="https://cdn.tailwindcss.com" {}
            }

            body class="container max-w-full min-h-screen bg-gray-50 dark:bg-gray-900"
            {
                (content)
            }
        }
    }
}

/// A full-page error view with a heading, explanation, and a way home.
pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    // Template adapted from https://flowbite.com/blocks/marketing/404/
    let content = html!(
        section class="bg-white dark:bg-gray-900"
        {
            div class="py-8 px-4 mx-auto max-w-screen-xl lg:py-16 lg:px-6"
            {
                div class="mx-auto max-w-screen-sm text-center"
                {
                    h1
                        class="mb-4 text-7xl tracking-tight font-extrabold
                            lg:text-9xl text-green-600 dark:text-green-500"
                    {
                        (header)
                    }

                    p
                        class="mb-4 text-3xl md:text-4xl tracking-tight
                            font-bold text-gray-900 dark:text-white"
                    {
                        (description)
                    }

                    p
                        class="mb-4 text-1xl md:text-2xl tracking-tight
                            text-gray-900 dark:text-white"
                    {
                        (fix)
                    }

                    a
                        href="/"
                        class="inline-flex text-white bg-green-600
                            hover:bg-green-800 focus:ring-4 focus:outline-hidden
                            focus:ring-green-300 font-medium rounded text-sm px-5
                            py-2.5 text-center dark:focus:ring-green-900 my-4"
                    {
                        "Back to the Dashboard"
                    }
                }
            }
        }
    );

    base(title, &content)
}

/// A pulsing placeholder block shown while content loads.
pub fn skeleton(class: &str) -> Markup {
    html! {
        div class={ "animate-pulse rounded-md bg-gray-200 dark:bg-gray-700 " (class) } {}
    }
}

/// A card-shaped arrangement of [skeleton] blocks.
pub fn card_skeleton() -> Markup {
    html! {
        div class=(CARD_STYLE)
        {
            div class="space-y-4"
            {
                (skeleton("h-4 w-3/4"))
                (skeleton("h-4 w-1/2"))
                (skeleton("h-8 w-full"))
            }
        }
    }
}

pub fn loading_spinner(class: &str) -> Markup {
    // Spinner SVG adapted from https://flowbite.com/docs/components/spinner/
    html! {
        svg
            aria-hidden="true"
            role="status"
            class={ "animate-spin " (class) }
            viewBox="0 0 100 101"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
        {
            path
                d="M100 50.5908C100 78.2051 77.6142 100.591 50 100.591C22.3858 100.591 0 78.2051 0 50.5908C0 22.9766 22.3858 0.59082 50 0.59082C77.6142 0.59082 100 22.9766 100 50.5908ZM9.08144 50.5908C9.08144 73.1895 27.4013 91.5094 50 91.5094C72.5987 91.5094 90.9186 73.1895 90.9186 50.5908C90.9186 27.9921 72.5987 9.67226 50 9.67226C27.4013 9.67226 9.08144 27.9921 9.08144 50.5908Z"
                fill="#E5E7EB" {}
            path
                d="M93.9676 39.0409C96.393 38.4038 97.8624 35.9116 97.0079 33.5539C95.2932 28.8227 92.871 24.3692 89.8167 20.348C85.8452 15.1192 80.8826 10.7238 75.2124 7.41289C69.5422 4.10194 63.2754 1.94025 56.7698 1.05124C51.7666 0.367541 46.6976 0.446843 41.7345 1.27873C39.2613 1.69328 37.813 4.19778 38.4501 6.62326C39.0873 9.04874 41.5694 10.4717 44.0505 10.1071C47.8511 9.54855 51.7191 9.52689 55.5402 10.0491C60.8642 10.7766 65.9928 12.5457 70.6331 15.2552C75.2735 17.9648 79.3347 21.5619 82.5849 25.841C84.9175 28.9121 86.7997 32.2913 88.1811 35.8758C89.083 38.2158 91.5421 39.6781 93.9676 39.0409Z"
                fill="currentColor" {}
        }
    }
}

/// A stroked line icon in the style of the Lucide icon set.
fn stroke_icon(class: &str, paths: &[&str]) -> Markup {
    html! {
        svg
            class=(class)
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        {
            @for path in paths {
                path d=(path) {}
            }
        }
    }
}

pub fn trending_up_icon(class: &str) -> Markup {
    stroke_icon(class, &["M22 7 13.5 15.5 8.5 10.5 2 17", "M16 7h6v6"])
}

pub fn trending_down_icon(class: &str) -> Markup {
    stroke_icon(class, &["M22 17 13.5 8.5 8.5 13.5 2 7", "M16 17h6v-6"])
}

pub fn dollar_icon(class: &str) -> Markup {
    stroke_icon(
        class,
        &["M12 2v20", "M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6"],
    )
}

pub fn target_icon(class: &str) -> Markup {
    html! {
        svg
            class=(class)
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            aria-hidden="true"
        {
            circle cx="12" cy="12" r="10" {}
            circle cx="12" cy="12" r="6" {}
            circle cx="12" cy="12" r="2" {}
        }
    }
}

pub fn arrow_up_right_icon(class: &str) -> Markup {
    stroke_icon(class, &["M7 7h10v10", "M7 17 17 7"])
}

pub fn arrow_down_left_icon(class: &str) -> Markup {
    stroke_icon(class, &["M17 7 7 17", "M17 17H7V7"])
}

pub fn alert_triangle_icon(class: &str) -> Markup {
    stroke_icon(
        class,
        &[
            "m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 22h16a2 2 0 0 0 1.73-4",
            "M12 9v4",
            "M12 17h.01",
        ],
    )
}

pub fn refresh_icon(class: &str) -> Markup {
    stroke_icon(
        class,
        &[
            "M3 12a9 9 0 0 1 9-9 9.75 9.75 0 0 1 6.74 2.74L21 8",
            "M21 3v5h-5",
            "M21 12a9 9 0 0 1-9 9 9.75 9.75 0 0 1-6.74-2.74L3 16",
            "M3 21v-5h5",
        ],
    )
}

pub fn pencil_icon(class: &str) -> Markup {
    stroke_icon(class, &["M17 3a2.828 2.828 0 1 1 4 4L7.5 20.5 2 22l1.5-5.5z"])
}

pub fn trash_icon(class: &str) -> Markup {
    stroke_icon(
        class,
        &[
            "M3 6h18",
            "M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6",
            "M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2",
        ],
    )
}

pub fn plus_icon(class: &str) -> Markup {
    stroke_icon(class, &["M5 12h14", "M12 5v14"])
}

pub fn format_currency(number: f64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    let mut formatted_string = if number < 0.0 {
        negative_fmt.fmt_string(number.abs())
    } else if number > 0.0 {
        positive_fmt.fmt_string(number)
    } else {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        "$0.00".to_owned()
    };

    // numfmt omits the last trailing zero, so we must add it ourselves
    // For example, "12.30" is rendered as "12.3" so we append "0".
    if formatted_string.as_bytes()[formatted_string.len() - 3] != b'.' {
        formatted_string = format!("{formatted_string}0");
    }

    formatted_string
}

const DISPLAY_DATE_FORMAT: &[BorrowedFormatItem] =
    format_description!("[day padding:zero] [month repr:short] [year]");

/// Format an ISO date for display, e.g. "28 Jul 2026".
///
/// # Errors
/// Returns [Error::DateFormat] if the date cannot be formatted. Formatting
/// happens during the render pass, so failures surface through the render
/// boundary rather than as a fetch error.
pub fn format_date(date: Date) -> Result<String, Error> {
    date.format(DISPLAY_DATE_FORMAT).map_err(Error::from)
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    #[test]
    fn formats_positive_amounts() {
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(0.99), "$0.99");
        assert_eq!(format_currency(20.0), "$20.00");
    }

    #[test]
    fn formats_negative_amounts() {
        assert_eq!(format_currency(-1234.5), "-$1,234.50");
        assert_eq!(format_currency(-0.5), "-$0.50");
    }

    #[test]
    fn formats_zero() {
        assert_eq!(format_currency(0.0), "$0.00");
    }

    #[test]
    fn formats_dates_for_display() {
        assert_eq!(format_date(date!(2026 - 07 - 28)).unwrap(), "28 Jul 2026");
        assert_eq!(format_date(date!(2026 - 01 - 02)).unwrap(), "02 Jan 2026");
    }

    #[test]
    fn skeleton_merges_extra_classes() {
        let html = skeleton("h-4 w-1/2").into_string();

        assert!(html.contains("animate-pulse"));
        assert!(html.contains("h-4 w-1/2"));
    }

    #[test]
    fn card_skeleton_contains_three_placeholder_rows() {
        let html = card_skeleton().into_string();

        assert_eq!(html.matches("animate-pulse").count(), 3);
    }

    #[test]
    fn base_page_includes_title_and_content() {
        let html = base("Dashboard", &maud::html! { p { "hello" } }).into_string();

        assert!(html.contains("<title>Dashboard - Finboard</title>"));
        assert!(html.contains("<p>hello</p>"));
        assert!(html.contains("htmx.org"));
    }
}
