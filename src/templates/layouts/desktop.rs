use maud::{html, Markup, DOCTYPE};

const SITE_NAME: &str = "Rockridge Homes";

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | " (SITE_NAME) }
                link rel="icon" href="/static/favicon/favicon.ico";
                link rel="stylesheet" href="/static/main.css";
            }
            body class="min-h-screen bg-gray-50" {
              header class="flex items-center justify-between px-6 py-3 shadow bg-white" {
                  a href="/" class="flex items-center space-x-2" {
                      svg
                          xmlns="http://www.w3.org/2000/svg"
                          width="28"
                          height="28"
                          viewBox="0 0 24 24"
                          fill="none"
                          stroke="#2563eb"
                          stroke-width="2"
                          stroke-linecap="round"
                          stroke-linejoin="round"
                          class="icon icon-tabler icon-tabler-home"
                      {
                          path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                          path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                          path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                          path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                      }
                      span class="text-2xl font-bold text-gray-900" { (SITE_NAME) }
                  }
                  nav {
                      ul class="flex space-x-8" {
                          li { a href="/" { "Buy" } }
                          li { a href="/properties" { "API" } }
                      }
                  }
              }
                (content)
              footer class="bg-gray-900 text-gray-400 py-8 mt-16 text-center" {
                  p { "Listings for Rockridge, Oakland and nearby." }
              }
            }
        }
    }
}
