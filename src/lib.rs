/*! descriptors_and_words encodes GPU resource descriptors for GCN and RDNA
hardware, bit-exactly, across every descriptor schema from GFX6 through GFX12.

A descriptor is the fixed-size word array the GPU's texture, cache, and
render-backend units read to locate and interpret a resource.  Getting one
word wrong does not fail loudly; the GPU silently misrenders or hangs.  This
crate is the codec between an abstract resource-view description and those
words, and nothing else:

| Concern                                   | Here? | Who owns it instead        |
|-------------------------------------------|-------|----------------------------|
| Sampler/buffer/image/FMASK descriptors    | yes   |                            |
| Depth/color render-target register state  | yes   |                            |
| Format-to-enumerant translation           | yes   |                            |
| Command-buffer construction, submission   | no    | the command-stream emitter |
| Surface/tiling layout computation         | no    | the surface-layout module  |
| Memory allocation, residency, lifetimes   | no    | the driver proper          |
| Application-level format support queries  | no    | the format-query layer     |

# Shape of the API

Every builder is a pure function `(generation-or-capabilities, immutable
state) -> words`.  There is no internal state anywhere: the only shared data
are the read-only capability and format tables built once at device
initialization, so command recording threads can build descriptors
concurrently without any locking.

Unsupported format combinations come back as `None` from the translators —
the caller rejects those views long before a builder runs.  Violating a
builder's documented *contract* (an FMASK pair outside the hardware table, an
attribute ring before GFX11) is not an error value; it panics, because no
valid caller can reach it.

Image descriptors and render-target state split into a static build and a
mutable patch ([`descriptors::image::set_mutable_texture_fields`] and
friends): addresses, tiling, and compression metadata change on rebind
without the shape changing, and re-deriving the whole descriptor on every
bind would be wasted work in the hottest path a driver has.
*/

mod bittricks;
pub mod descriptors;
pub mod formats;
pub mod hw;
pub mod surfaces;
pub mod swizzle;
