//! Third-party integrations resolved once from configuration
//!
//! Each integration is either present with its identifier or absent. Missing
//! identifiers are silently absent; malformed ones are logged and dropped.

use site_shared::{process_warn, IntegrationIds, ProcessId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Integration {
    TagManager { container_id: String },
    Analytics { measurement_id: String },
    Pixel { pixel_id: String },
    LinkedInInsight { partner_id: String },
    Heatmap { site_id: String },
}

impl Integration {
    pub fn name(&self) -> &'static str {
        match self {
            Integration::TagManager { .. } => "tag-manager",
            Integration::Analytics { .. } => "analytics",
            Integration::Pixel { .. } => "pixel",
            Integration::LinkedInInsight { .. } => "linkedin-insight",
            Integration::Heatmap { .. } => "heatmap",
        }
    }

    /// Loader snippet placed in the document head
    pub fn head_snippet(&self) -> String {
        match self {
            Integration::TagManager { container_id } => format!(
                r#"<script data-integration="tag-manager">(function(w,d,s,l,i){{w[l]=w[l]||[];w[l].push({{'gtm.start':new Date().getTime(),event:'gtm.js'}});var f=d.getElementsByTagName(s)[0],j=d.createElement(s);j.async=true;j.src='https://www.googletagmanager.com/gtm.js?id='+i;f.parentNode.insertBefore(j,f);}})(window,document,'script','dataLayer','{container_id}');</script>"#
            ),
            Integration::Analytics { measurement_id } => format!(
                r#"<script data-integration="analytics" async src="https://www.googletagmanager.com/gtag/js?id={measurement_id}"></script><script>window.dataLayer=window.dataLayer||[];function gtag(){{dataLayer.push(arguments);}}gtag('js',new Date());gtag('config','{measurement_id}');</script>"#
            ),
            Integration::Pixel { pixel_id } => format!(
                r#"<script data-integration="pixel">!function(f,b,e,v,n,t,s){{if(f.fbq)return;n=f.fbq=function(){{n.callMethod?n.callMethod.apply(n,arguments):n.queue.push(arguments)}};n.queue=[];t=b.createElement(e);t.async=!0;t.src=v;s=b.getElementsByTagName(e)[0];s.parentNode.insertBefore(t,s)}}(window,document,'script','https://connect.facebook.net/en_US/fbevents.js');fbq('init','{pixel_id}');fbq('track','PageView');</script>"#
            ),
            Integration::LinkedInInsight { partner_id } => format!(
                r#"<script data-integration="linkedin-insight">window._linkedin_data_partner_ids=window._linkedin_data_partner_ids||[];window._linkedin_data_partner_ids.push('{partner_id}');</script><script async src="https://snap.licdn.com/li.lms-analytics/insight.min.js"></script>"#
            ),
            Integration::Heatmap { site_id } => format!(
                r#"<script data-integration="heatmap">(function(h,o,t,j,a,r){{h.hj=h.hj||function(){{(h.hj.q=h.hj.q||[]).push(arguments)}};h._hjSettings={{hjid:{site_id},hjsv:6}};a=o.getElementsByTagName('head')[0];r=o.createElement('script');r.async=1;r.src=t+h._hjSettings.hjid+j+h._hjSettings.hjsv;a.appendChild(r);}})(window,document,'https://static.hotjar.com/c/hotjar-','.js?sv=');</script>"#
            ),
        }
    }

    /// Fallback placed at the start of `<body>`, if the integration has one
    pub fn body_snippet(&self) -> Option<String> {
        match self {
            Integration::TagManager { container_id } => Some(format!(
                r#"<noscript><iframe src="https://www.googletagmanager.com/ns.html?id={container_id}" height="0" width="0" style="display:none;visibility:hidden"></iframe></noscript>"#
            )),
            Integration::Pixel { pixel_id } => Some(format!(
                r#"<noscript><img height="1" width="1" style="display:none" alt="" src="https://www.facebook.com/tr?id={pixel_id}&amp;ev=PageView&amp;noscript=1"></noscript>"#
            )),
            _ => None,
        }
    }
}

fn is_token(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric())
}

fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

fn with_prefix(value: &str, prefix: &str) -> bool {
    value.strip_prefix(prefix).is_some_and(is_token)
}

/// Universal Analytics property: `UA-<account>-<property>`
fn is_universal_analytics(value: &str) -> bool {
    value
        .strip_prefix("UA-")
        .and_then(|rest| rest.split_once('-'))
        .is_some_and(|(account, property)| is_numeric(account) && is_numeric(property))
}

/// Present integrations, in a fixed order
pub fn resolve_integrations(ids: &IntegrationIds) -> Vec<Integration> {
    let candidates: [(&str, Option<&String>, fn(&str) -> bool, fn(String) -> Integration); 5] = [
        (
            "tag-manager",
            ids.tag_manager.as_ref(),
            |v| with_prefix(v, "GTM-"),
            |container_id| Integration::TagManager { container_id },
        ),
        (
            "analytics",
            ids.analytics.as_ref(),
            |v| with_prefix(v, "G-") || is_universal_analytics(v),
            |measurement_id| Integration::Analytics { measurement_id },
        ),
        (
            "pixel",
            ids.pixel.as_ref(),
            is_numeric,
            |pixel_id| Integration::Pixel { pixel_id },
        ),
        (
            "linkedin-insight",
            ids.linkedin_partner.as_ref(),
            is_numeric,
            |partner_id| Integration::LinkedInInsight { partner_id },
        ),
        (
            "heatmap",
            ids.heatmap.as_ref(),
            is_numeric,
            |site_id| Integration::Heatmap { site_id },
        ),
    ];

    candidates
        .into_iter()
        .filter_map(|(name, value, is_valid, build)| {
            let value = value?;
            if is_valid(value) {
                Some(build(value.clone()))
            } else {
                process_warn!(
                    ProcessId::current(),
                    "⚠️ Ignoring malformed {} id {:?}",
                    name,
                    value
                );
                None
            }
        })
        .collect()
}
