use rental_keymap::message::PrintContent;

use crate::model::Model;

pub fn print(model: &mut Model, content: &[PrintContent]) {
    model.commandline.content = content.to_vec();
}
