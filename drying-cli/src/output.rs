use drying_core::{DryingAdvisory, Locale, Severity, WeatherCondition, WeatherObservation};

pub fn print(
    observation: &WeatherObservation,
    advisory: &DryingAdvisory,
    locale: Locale,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(advisory)?);
    } else {
        print!("{}", render(observation, advisory, locale));
    }
    Ok(())
}

fn severity_marker(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "[ok]",
        Severity::Info => "[info]",
        Severity::Warning => "[warn]",
        Severity::Danger => "[!!]",
    }
}

pub fn render(observation: &WeatherObservation, advisory: &DryingAdvisory, locale: Locale) -> String {
    let mut out = String::new();

    for line in observation_lines(observation, locale) {
        out.push_str(&line);
        out.push('\n');
    }
    if !out.is_empty() {
        out.push('\n');
    }

    out.push_str(&format!(
        "{} {}\n{}\n",
        severity_marker(advisory.severity()),
        advisory.status.label(locale),
        advisory.message,
    ));

    if let Some(score) = advisory.score {
        out.push_str(&format!(
            "score: temperature {} + humidity {} + wind {} + sky {} = {}\n",
            score.temperature,
            score.humidity,
            score.wind,
            score.condition,
            score.total(),
        ));
    }

    out
}

fn observation_lines(obs: &WeatherObservation, locale: Locale) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(code) = obs.condition_code {
        let condition = WeatherCondition::from_wmo_code(code);
        lines.push(format!("weather:       {} (WMO {code})", condition.description(locale)));
    }
    if let Some(text) = &obs.condition_text {
        lines.push(format!("summary:       {text}"));
    }
    if let Some(t) = obs.temperature_c {
        lines.push(format!("temperature:   {t:.1} °C"));
    }
    if let Some(h) = obs.humidity_pct {
        lines.push(format!("humidity:      {h:.0} %"));
    }
    if let Some(w) = obs.wind_speed_mps {
        lines.push(format!("wind:          {w:.1} m/s"));
    }
    if let Some(p) = obs.precipitation_mm {
        lines.push(format!("precipitation: {p:.1} mm"));
    }
    if let Some(c) = obs.rain_chance_pct {
        lines.push(format!("rain chance:   {c:.0} %"));
    }

    lines
}
