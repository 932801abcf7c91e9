use std::fmt::Write;

use crate::index::ObjectGroupIndex;
use crate::model::MemberDescriptor;

/// Render one `var <object> = { ... }` literal per owning object.
///
/// Properties become a single annotated field, methods an empty function
/// whose body carries one `<signature>` block per documented overload.
pub fn render_intellisense(groups: &ObjectGroupIndex) -> String {
    let mut output = String::new();

    for (object, members) in groups.iter() {
        let _ = writeln!(output, "var {object} = {{");
        for (member, overloads) in members {
            let Some(first) = overloads.first() else {
                continue;
            };
            if first.is_method() {
                render_method(&mut output, member, overloads);
            } else {
                render_field(&mut output, member, first);
            }
        }
        let _ = writeln!(output, "}}\n");
    }

    output
}

fn render_field(buffer: &mut String, member: &str, descriptor: &MemberDescriptor) {
    let value = descriptor.return_alias.as_deref().unwrap_or_default();
    let _ = writeln!(
        buffer,
        "\t/// <field value = \"{value}\">{}</field>",
        descriptor.comment
    );
    let _ = writeln!(buffer, "\t{member}: {value},");
}

fn render_method(buffer: &mut String, member: &str, overloads: &[MemberDescriptor]) {
    let _ = writeln!(buffer, "\t{member}: function () {{");
    for overload in overloads {
        let _ = writeln!(buffer, "\t/// <signature>");
        let _ = writeln!(buffer, "\t/// <summary>{}</summary>", overload.comment);
        for param in &overload.argument_aliases {
            let _ = writeln!(
                buffer,
                "\t/// <param name=\"{param}\" value=\"{param}\">param</param>"
            );
        }
        if let Some(ret) = &overload.return_alias {
            let _ = writeln!(buffer, "\t/// <returns value =\"{ret}\"/>");
        }
        let _ = writeln!(buffer, "\t/// </signature>\n");
    }
    let _ = writeln!(buffer, "\t}},\n");
}
