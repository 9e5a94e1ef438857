//! One function per page section. Each takes the provider and returns markup;
//! none of them decide what content is visible beyond what the provider's
//! filtered views already return.

use maud::{html, Markup};

use crate::contact::{ContactFields, NotificationKind};
use crate::content::ContentProvider;
use crate::render::ContactFormView;

pub fn hero(provider: &ContentProvider) -> Markup {
    let content = provider.content();
    html! {
        section #hero aria-labelledby="hero-heading" {
            h1 #hero-heading { (content.name) }
            p .title { (content.title) }
            nav aria-label="Primary" {
                a href="#contact" { "Get in Touch" }
                " "
                a href="#experience" { "View Work" }
            }
        }
    }
}

pub fn about(provider: &ContentProvider) -> Markup {
    html! {
        section #about aria-labelledby="about-heading" {
            h2 #about-heading { "About" }
            p { (provider.content().summary) }
        }
    }
}

pub fn experience(provider: &ContentProvider) -> Markup {
    html! {
        section #experience aria-labelledby="experience-heading" {
            h2 #experience-heading { "Experience" }
            @for job in &provider.content().experience {
                article .job {
                    h3 { (job.role) }
                    p .company { (job.company) }
                    p .period { (job.period) }
                    @if !job.highlights.is_empty() {
                        ul {
                            @for highlight in &job.highlights {
                                li { (highlight) }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn skills(provider: &ContentProvider) -> Markup {
    let skills = provider.skills_with_content();
    html! {
        section #skills aria-labelledby="skills-heading" {
            h2 #skills-heading { "Skills" }
            @for category in skills.iter() {
                div .skill-category {
                    h3 { (category.name) }
                    ul {
                        @for skill in &category.skills {
                            li { (skill) }
                        }
                    }
                }
            }
        }
    }
}

pub fn education(provider: &ContentProvider) -> Markup {
    html! {
        section #education aria-labelledby="education-heading" {
            h2 #education-heading { "Education" }
            @for edu in &provider.content().education {
                article .degree {
                    h3 { (edu.degree) }
                    p .org { (edu.org) }
                    p .period { (edu.period) }
                    @if let Some(details) = &edu.details {
                        p .details { (details) }
                    }
                }
            }
        }
    }
}

fn contact_form(form: &ContactFormView) -> Markup {
    let ContactFields {
        name,
        email,
        message,
    } = &form.fields;
    html! {
        @if let Some(notice) = &form.notification {
            @let class = match notice.kind {
                NotificationKind::Success => "notice success",
                NotificationKind::Error => "notice error",
            };
            p class=(class) role="status" { (notice.message) }
        }
        @if form.enabled {
            form method="post" action="/contact#contact" {
                input type="text" name="honeypot" value="" hidden
                    tabindex="-1" autocomplete="off" aria-hidden="true";
                label for="name" { "Name *" }
                input type="text" #name name="name" required value=(name)
                    placeholder="Your full name";
                label for="email" { "Email *" }
                input type="email" #email name="email" required value=(email)
                    placeholder="your.email@example.com";
                label for="message" { "Message *" }
                textarea #message name="message" required rows="6" { (message) }
                button type="submit" { "Send Message" }
            }
        } @else {
            p { "Contact form is not configured. Please use direct contact methods." }
        }
    }
}

pub fn contact(provider: &ContentProvider, form: &ContactFormView) -> Markup {
    let contacts = &provider.content().contacts;
    let links = provider.valid_contact_links();
    html! {
        section #contact aria-labelledby="contact-heading" {
            h2 #contact-heading { "Let's Work Together" }
            div .contact-form {
                h3 { "Send a Message" }
                (contact_form(form))
            }
            div .direct-contact {
                h3 { "Direct Contact" }
                ul {
                    li { "Email: " a href={ "mailto:" (contacts.email) } { (contacts.email) } }
                    @if let Some(phone) = provider.visible_phone() {
                        li { "Phone: " a href={ "tel:" (phone) } { (phone) } }
                    }
                    li { "Location: " (contacts.location) }
                }
            }
            @if !links.is_empty() {
                div .links {
                    h3 { "Connect Online" }
                    ul {
                        @for link in &links {
                            li {
                                a href=(link.url) target="_blank" rel="noopener noreferrer" {
                                    (link.label)
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
