//! Landing page markup

use crate::cache::ClientStats;
use crate::config::Config;

/// Renders the landing page with current stats and configuration.
///
/// The button calls `/api` and only shows an acknowledgement; the report
/// itself goes to the server log.
pub fn render_index(stats: ClientStats, config: &Config) -> String {
    let debug = if config.debug { "ON" } else { "OFF" };
    format!(
        r#"<!DOCTYPE html>
<html>
    <head>
        <title>Star Wars API Demo</title>
        <style>
            body {{ font-family: Arial, sans-serif; max-width: 800px; margin: 0 auto; padding: 20px; }}
            h1 {{ color: #FFE81F; background-color: #000; padding: 10px; }}
            button {{ background-color: #FFE81F; border: none; padding: 10px 20px; cursor: pointer; }}
            .footer {{ margin-top: 50px; font-size: 12px; color: #666; }}
            pre {{ background: #f4f4f4; padding: 10px; border-radius: 5px; }}
        </style>
    </head>
    <body>
        <h1>Star Wars API Demo</h1>
        <p>This page demonstrates fetching data from the Star Wars API.</p>
        <p>Check your console for the API results.</p>
        <button onclick="fetchData()">Fetch Star Wars Data</button>
        <div id="results"></div>
        <script>
            function fetchData() {{
                document.getElementById('results').innerHTML = '<p>Loading data...</p>';
                fetch('/api')
                    .then(res => res.text())
                    .then(() => {{
                        alert('API request made! Check server console.');
                        document.getElementById('results').innerHTML = '<p>Data fetched! Check server console.</p>';
                    }})
                    .catch(err => {{
                        document.getElementById('results').innerHTML = '<p>Error: ' + err.message + '</p>';
                    }});
            }}
        </script>
        <div class="footer">
            <p>API calls: N/A (now counted per request) | Cache entries: {cache_size} | Errors: {errors}</p>
            <pre>Debug mode: {debug} | Timeout: {timeout}ms</pre>
        </div>
    </body>
</html>
"#,
        cache_size = stats.cache_size,
        errors = stats.errors,
        debug = debug,
        timeout = config.timeout_ms,
    )
}
