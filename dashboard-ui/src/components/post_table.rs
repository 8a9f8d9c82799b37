//! Post Table Component
//!
//! The current page of posts. Clicking a row opens the detail modal.

use foodics_dashboard::Post;
use leptos::*;

use crate::state::global::DashboardState;

/// Characters of the body shown in the table
const EXCERPT_LEN: usize = 80;

#[component]
pub fn PostTable() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let rows = move || state.page_posts();
    let is_empty = move || state.store.with(|s| s.paginated_posts().is_empty());

    view! {
        <div class="overflow-x-auto">
            <table class="w-full text-left">
                <thead class="text-gray-400 text-sm border-b border-gray-700">
                    <tr>
                        <th class="py-3 px-2 w-16">"ID"</th>
                        <th class="py-3 px-2">"Title"</th>
                        <th class="py-3 px-2 hidden md:table-cell">"Excerpt"</th>
                        <th class="py-3 px-2 w-32">"Date"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=rows
                        key=|post| post.id
                        children=move |post| view! { <PostRow post=post /> }
                    />
                </tbody>
            </table>

            <Show when=is_empty>
                <p class="text-gray-400 text-sm py-6 text-center">
                    {move || state.store.with(|s| empty_message(s.search_term()))}
                </p>
            </Show>
        </div>
    }
}

#[component]
fn PostRow(post: Post) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let date = post
        .published_on()
        .map(|d| d.format("%b %d, %Y").to_string())
        .unwrap_or_else(|| "—".to_string());
    let excerpt_text = excerpt(&post.body, EXCERPT_LEN);
    let id = post.id;
    let title = post.title.clone();

    view! {
        <tr
            class="border-b border-gray-700 last:border-0 hover:bg-gray-750 cursor-pointer"
            on:click=move |_| state.open_post(post.clone())
        >
            <td class="py-3 px-2 text-gray-400">{id}</td>
            <td class="py-3 px-2 font-medium capitalize">{title}</td>
            <td class="py-3 px-2 text-gray-400 text-sm hidden md:table-cell">{excerpt_text}</td>
            <td class="py-3 px-2 text-gray-400 text-sm">{date}</td>
        </tr>
    }
}

/// First line of `body`, cut to `max_chars` with an ellipsis
fn excerpt(body: &str, max_chars: usize) -> String {
    let line = body.lines().next().unwrap_or_default();
    if line.chars().count() <= max_chars {
        return line.to_string();
    }
    let cut: String = line.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}

fn empty_message(search_term: &str) -> String {
    if search_term.is_empty() {
        "No posts to show".to_string()
    } else {
        format!("No posts match \"{}\"", search_term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_short_body() {
        assert_eq!(excerpt("quia et suscipit", 80), "quia et suscipit");
    }

    #[test]
    fn test_excerpt_takes_first_line() {
        assert_eq!(excerpt("first line\nsecond line", 80), "first line");
        assert_eq!(excerpt("", 80), "");
    }

    #[test]
    fn test_excerpt_truncates() {
        assert_eq!(excerpt("abcde fghij", 6), "abcde…");
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(empty_message(""), "No posts to show");
        assert_eq!(empty_message("foo"), "No posts match \"foo\"");
    }
}
