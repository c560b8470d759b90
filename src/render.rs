//! HTML page rendering.
//!
//! Pure presentation: every function maps an assembled read model to a page
//! string. All dynamic content goes through `escape`.

use crate::forms::{ArtistForm, ShowForm, VenueForm};
use crate::views::{ArtistDetail, CityGroup, EntitySummary, SearchResults, ShowRow, VenueDetail};

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, flash: Option<&str>, body: &str) -> String {
    let flash_html = match flash {
        Some(message) => format!(
            "<div class=\"flash\" role=\"status\">{}</div>\n",
            escape(message)
        ),
        None => String::new(),
    };
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title} | Bandstand</title>\n</head>\n<body>\n\
         <nav>\n<a href=\"/\">Bandstand</a>\n<a href=\"/venues\">Venues</a>\n\
         <a href=\"/artists\">Artists</a>\n<a href=\"/shows\">Shows</a>\n</nav>\n\
         {flash_html}<main>\n{body}\n</main>\n</body>\n</html>\n",
        title = escape(title),
        flash_html = flash_html,
        body = body,
    )
}

pub fn home_page(flash: Option<&str>) -> String {
    layout(
        "Home",
        flash,
        "<h1>Bandstand</h1>\n\
         <p>A booking directory for live-music venues and artists.</p>\n\
         <ul>\n\
         <li><a href=\"/venues/create\">List a venue</a></li>\n\
         <li><a href=\"/artists/create\">List an artist</a></li>\n\
         <li><a href=\"/shows/create\">List a show</a></li>\n\
         </ul>",
    )
}

fn search_form(action: &str) -> String {
    format!(
        "<form method=\"post\" action=\"{action}\">\n\
         <input type=\"search\" name=\"search_term\" placeholder=\"Find by name\">\n\
         <button type=\"submit\">Search</button>\n</form>",
        action = action
    )
}

fn summary_items(base_path: &str, entries: &[EntitySummary]) -> String {
    entries
        .iter()
        .map(|entry| {
            format!(
                "<li><a href=\"{base}/{id}\">{name}</a> ({count} upcoming)</li>",
                base = base_path,
                id = entry.id,
                name = escape(&entry.name),
                count = entry.num_upcoming_shows,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn venues_page(groups: &[CityGroup], flash: Option<&str>) -> String {
    let mut body = String::from("<h1>Venues</h1>\n");
    body.push_str(&search_form("/venues/search"));
    for group in groups {
        body.push_str(&format!(
            "<h2>{}, {}</h2>\n<ul>\n{}\n</ul>\n",
            escape(&group.city),
            escape(&group.state),
            summary_items("/venues", &group.venues),
        ));
    }
    layout("Venues", flash, &body)
}

fn search_results_page(
    title: &str,
    base_path: &str,
    term: &str,
    results: &SearchResults,
) -> String {
    let body = format!(
        "<h1>{title}</h1>\n{form}\n\
         <p>Found {count} result(s) for \u{201c}{term}\u{201d}.</p>\n<ul>\n{items}\n</ul>",
        title = escape(title),
        form = search_form(&format!("{}/search", base_path)),
        count = results.count,
        term = escape(term),
        items = summary_items(base_path, &results.data),
    );
    layout(title, None, &body)
}

pub fn venue_search_page(term: &str, results: &SearchResults) -> String {
    search_results_page("Venue search", "/venues", term, results)
}

pub fn artist_search_page(term: &str, results: &SearchResults) -> String {
    search_results_page("Artist search", "/artists", term, results)
}

fn show_section(heading: &str, shows: &[crate::views::ShowRef], base_path: &str) -> String {
    let items = shows
        .iter()
        .map(|show| {
            format!(
                "<li><a href=\"{base}/{id}\">{name}</a> · {time}</li>",
                base = base_path,
                id = show.id,
                name = escape(&show.name),
                time = escape(&show.start_time),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "<h2>{} ({})</h2>\n<ul>\n{}\n</ul>\n",
        heading,
        shows.len(),
        items
    )
}

fn field_rows(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(label, value)| format!("<dt>{}</dt><dd>{}</dd>", label, escape(value)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn venue_detail_page(detail: &VenueDetail, flash: Option<&str>) -> String {
    let venue = &detail.venue;
    let seeking = if venue.seeking_talent {
        "Seeking talent"
    } else {
        "Not seeking talent"
    };
    let body = format!(
        "<h1>{name}</h1>\n<p>{seeking}</p>\n<dl>\n{fields}\n</dl>\n\
         {upcoming}{past}\
         <p>\n<a href=\"/venues/{id}/edit\">Edit venue</a>\n</p>\n\
         <form method=\"post\" action=\"/venues/{id}/delete\">\n\
         <button type=\"submit\">Delete venue</button>\n</form>",
        name = escape(&venue.name),
        seeking = seeking,
        fields = field_rows(&[
            ("City", &venue.city),
            ("State", &venue.state),
            ("Address", &venue.address),
            ("Phone", &venue.phone),
            ("Genres", &venue.genres),
            ("Website", &venue.website_link),
            ("Facebook", &venue.facebook_link),
            ("Seeking description", &venue.seeking_description),
        ]),
        upcoming = show_section("Upcoming shows", &detail.upcoming_shows, "/artists"),
        past = show_section("Past shows", &detail.past_shows, "/artists"),
        id = venue.id,
    );
    layout(&venue.name, flash, &body)
}

pub fn artist_detail_page(detail: &ArtistDetail, flash: Option<&str>) -> String {
    let artist = &detail.artist;
    let body = format!(
        "<h1>{name}</h1>\n<dl>\n{fields}\n</dl>\n\
         {upcoming}{past}\
         <p>\n<a href=\"/artists/{id}/edit\">Edit artist</a>\n</p>\n\
         <form method=\"post\" action=\"/artists/{id}/delete\">\n\
         <button type=\"submit\">Delete artist</button>\n</form>",
        name = escape(&artist.name),
        fields = field_rows(&[
            ("City", &artist.city),
            ("State", &artist.state),
            ("Phone", &artist.phone),
            ("Genres", &artist.genres),
            ("Website", &artist.website_link),
            ("Facebook", &artist.facebook_link),
            ("Seeking description", &artist.seeking_description),
        ]),
        upcoming = show_section("Upcoming shows", &detail.upcoming_shows, "/venues"),
        past = show_section("Past shows", &detail.past_shows, "/venues"),
        id = artist.id,
    );
    layout(&artist.name, flash, &body)
}

pub fn artists_page(artists: &[EntitySummary], flash: Option<&str>) -> String {
    let body = format!(
        "<h1>Artists</h1>\n{form}\n<ul>\n{items}\n</ul>",
        form = search_form("/artists/search"),
        items = summary_items("/artists", artists),
    );
    layout("Artists", flash, &body)
}

pub fn shows_page(rows: &[ShowRow], flash: Option<&str>) -> String {
    let items = rows
        .iter()
        .map(|row| {
            format!(
                "<li><a href=\"/artists/{artist_id}\">{artist}</a> at \
                 <a href=\"/venues/{venue_id}\">{venue}</a> · {time}</li>",
                artist_id = row.artist_id,
                artist = escape(&row.artist_name),
                venue_id = row.venue_id,
                venue = escape(&row.venue_name),
                time = escape(&row.start_time),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    let body = format!("<h1>Shows</h1>\n<ul>\n{}\n</ul>", items);
    layout("Shows", flash, &body)
}

fn text_input(label: &str, name: &str, value: &str) -> String {
    format!(
        "<label>{label}\n<input type=\"text\" name=\"{name}\" value=\"{value}\">\n</label><br>",
        label = label,
        name = name,
        value = escape(value),
    )
}

fn form_page(title: &str, action: &str, fields: &str, flash: Option<&str>) -> String {
    let body = format!(
        "<h1>{title}</h1>\n<form method=\"post\" action=\"{action}\">\n{fields}\n\
         <button type=\"submit\">Save</button>\n</form>",
        title = escape(title),
        action = action,
        fields = fields,
    );
    layout(title, flash, &body)
}

pub fn venue_form_page(
    title: &str,
    action: &str,
    form: &VenueForm,
    flash: Option<&str>,
) -> String {
    let checked = if form.seeking_talent.is_empty() {
        ""
    } else {
        " checked"
    };
    let fields = format!(
        "{}{}{}{}{}{}{}{}{}\
         <label>Seeking talent\n<input type=\"checkbox\" name=\"seeking_talent\" value=\"y\"{}>\n</label><br>\n{}",
        text_input("Name", "name", &form.name),
        text_input("City", "city", &form.city),
        text_input("State", "state", &form.state),
        text_input("Address", "address", &form.address),
        text_input("Phone", "phone", &form.phone),
        text_input("Genres", "genres", &form.genres),
        text_input("Image link", "image_link", &form.image_link),
        text_input("Website link", "website_link", &form.website_link),
        text_input("Facebook link", "facebook_link", &form.facebook_link),
        checked,
        text_input("Seeking description", "seeking_description", &form.seeking_description),
    );
    form_page(title, action, &fields, flash)
}

pub fn artist_form_page(
    title: &str,
    action: &str,
    form: &ArtistForm,
    flash: Option<&str>,
) -> String {
    let fields = format!(
        "{}{}{}{}{}{}{}{}{}",
        text_input("Name", "name", &form.name),
        text_input("City", "city", &form.city),
        text_input("State", "state", &form.state),
        text_input("Phone", "phone", &form.phone),
        text_input("Genres", "genres", &form.genres),
        text_input("Image link", "image_link", &form.image_link),
        text_input("Website link", "website_link", &form.website_link),
        text_input("Facebook link", "facebook_link", &form.facebook_link),
        text_input("Seeking description", "seeking_description", &form.seeking_description),
    );
    form_page(title, action, &fields, flash)
}

pub fn show_form_page(form: &ShowForm, flash: Option<&str>) -> String {
    let fields = format!(
        "{}{}{}",
        text_input("Artist id", "artist_id", &form.artist_id),
        text_input("Venue id", "venue_id", &form.venue_id),
        text_input("Start time (YYYY-MM-DD HH:MM:SS)", "start_time", &form.start_time),
    );
    form_page("New show", "/shows/create", &fields, flash)
}

pub fn not_found_page() -> String {
    layout(
        "Not found",
        None,
        "<h1>404: not found</h1>\n<p>The page or record you asked for does not exist.</p>",
    )
}

pub fn server_error_page() -> String {
    layout(
        "Something went wrong",
        None,
        "<h1>500: something went wrong</h1>\n<p>The request could not be completed.</p>",
    )
}
